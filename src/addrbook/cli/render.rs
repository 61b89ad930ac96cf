//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Tables are laid out here with
//! `unicode-width` so names in any script line up; colour comes from `colored`
//! and is only applied to whole cells or whole messages, never inside the
//! width math.

use addrbook::api::{CmdMessage, ListedNote, MessageLevel};
use addrbook::birthdays::UpcomingBirthday;
use addrbook::config::AddrBookConfig;
use addrbook::model::Record;
use chrono::Local;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

pub const CONTACT_HEADERS: [&str; 5] = ["Name", "Phones", "Birthday", "Email", "Address"];
pub const NOTE_HEADERS: [&str; 4] = ["ID", "Note", "Tags", "Creation Date"];
pub const BIRTHDAY_HEADERS: [&str; 4] = ["Name", "Birthday", "Congratulate On", "Days Left"];
pub const NOTE_DATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Widest any single cell may get before it is cut with an ellipsis.
const MAX_CELL_WIDTH: usize = 48;

/// Draws a boxed table. Every row must have as many cells as there are headers.
pub fn render_table<H: AsRef<str>>(headers: &[H], rows: &[Vec<String>]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|c| truncate_to_width(c, MAX_CELL_WIDTH)).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.as_ref().width()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.width());
            }
        }
    }

    let border = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}\n", segments.join(mid))
    };
    let line = |values: Vec<&str>| {
        let padded: Vec<String> = values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!(" {}{} ", v, " ".repeat(w.saturating_sub(v.width()))))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut out = border("┌", "┬", "┐");
    out.push_str(&line(headers.iter().map(|h| h.as_ref()).collect()));
    out.push_str(&border("├", "┼", "┤"));
    for row in &cells {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out.push_str(&border("└", "┴", "┘"));
    out
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

pub fn contact_rows(records: &[Record]) -> Vec<Vec<String>> {
    records.iter().map(|r| r.row().to_vec()).collect()
}

pub fn note_rows(notes: &[ListedNote]) -> Vec<Vec<String>> {
    notes
        .iter()
        .map(|listed| {
            vec![
                listed.id.to_string(),
                listed.note.text().replace('\n', " "),
                listed.note.tags_joined(),
                listed
                    .note
                    .created_at()
                    .with_timezone(&Local)
                    .format(NOTE_DATE_FORMAT)
                    .to_string(),
            ]
        })
        .collect()
}

pub fn birthday_rows(upcoming: &[UpcomingBirthday]) -> Vec<Vec<String>> {
    upcoming
        .iter()
        .map(|u| {
            vec![
                u.name.clone(),
                u.birthday.to_string(),
                u.date.format("%d.%m.%Y (%a)").to_string(),
                u.days_until.to_string(),
            ]
        })
        .collect()
}

pub fn render_config(config: &AddrBookConfig) -> String {
    config
        .list_all()
        .into_iter()
        .map(|(key, value)| format!("{key} = {value}\n"))
        .collect()
}

pub fn print_contacts(records: &[Record]) {
    if !records.is_empty() {
        print!("{}", render_table(&CONTACT_HEADERS, &contact_rows(records)));
    }
}

pub fn print_notes(notes: &[ListedNote]) {
    if !notes.is_empty() {
        print!("{}", render_table(&NOTE_HEADERS, &note_rows(notes)));
    }
}

pub fn print_birthdays(upcoming: &[UpcomingBirthday]) {
    if !upcoming.is_empty() {
        print!("{}", render_table(&BIRTHDAY_HEADERS, &birthday_rows(upcoming)));
    }
}

pub fn print_config(config: &AddrBookConfig) {
    print!("{}", render_config(config));
}

pub fn print_command_table(summaries: &[(String, String)]) {
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|(usage, about)| vec![usage.clone(), about.clone()])
        .collect();
    print!("{}", render_table(&["Command", "Description"], &rows));
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
