//! # REPL
//!
//! The interactive loop: read a line, parse it with [`parse_line`], dispatch it
//! to the API, render the outcome, repeat. Errors from a single command are
//! reported and the loop goes on; `exit`, `close` and end of input save both
//! books and stop.
//!
//! [`describe_error`] is the one place an [`AddrBookError`] becomes text.

use super::render::{
    print_birthdays, print_command_table, print_config, print_contacts, print_messages,
    print_notes,
};
use super::setup::{command_summaries, parse_line, Cli, ReplCommand};
use addrbook::api::{AddrBookApi, CmdMessage, CmdResult, ConfigAction, DetailAction};
use addrbook::error::{AddrBookError, FieldKind, Result};
use addrbook::init::{initialize, resolve_data_dir};
use addrbook::store::DataStore;
use chrono::{Local, NaiveDate};
use clap::error::ErrorKind;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const PROMPT: &str = "Enter a command: ";

/// What the loop should do after a command.
#[derive(Debug)]
pub enum Flow {
    Output(CmdResult),
    Hello,
    Exit,
}

pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_dir = resolve_data_dir(cli.data_dir, &cwd);
    let mut ctx = initialize(data_dir);

    println!("Welcome to the assistant bot!");
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();

    loop {
        print!("{PROMPT}");
        if let Err(e) = io::stdout().flush() {
            tracing::warn!(error = %e, "could not flush the prompt");
        }

        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "could not read input");
                println!();
                break;
            }
        }
        let line = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = line {
            print_messages(&[CmdMessage::warning(
                "The line was not valid UTF-8; unreadable bytes were replaced.",
            )]);
        }

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                println!("Please enter a command.");
                continue;
            }
            Err(e) => {
                report_parse_error(&e);
                continue;
            }
        };

        match dispatch(&mut ctx.api, command, Local::now().date_naive()) {
            Ok(Flow::Output(result)) => print_result(&result),
            Ok(Flow::Hello) => {
                println!("How can I help you?");
                print_command_table(&command_summaries());
            }
            Ok(Flow::Exit) => break,
            Err(e) => print_messages(&[CmdMessage::error(describe_error(&e))]),
        }
    }

    ctx.api.save()?;
    println!("Good bye!");
    Ok(())
}

/// Runs one parsed command against the API.
pub fn dispatch<S: DataStore>(
    api: &mut AddrBookApi<S>,
    command: ReplCommand,
    today: NaiveDate,
) -> Result<Flow> {
    use DetailAction::{Add, Change, Delete, Show};
    use FieldKind::{Address, Birthday, Email};

    let result = match command {
        ReplCommand::Hello => return Ok(Flow::Hello),
        ReplCommand::Exit => return Ok(Flow::Exit),

        ReplCommand::Add { name, phone } => api.add_contact(&name, &phone)?,
        ReplCommand::Change {
            name,
            old_phone,
            new_phone,
        } => api.change_phone(&name, &old_phone, &new_phone)?,
        ReplCommand::Phone { name } => api.show_contact(&name)?,
        ReplCommand::All => api.all_contacts()?,
        ReplCommand::Delete { name } => api.delete_contact(&name)?,
        ReplCommand::Search { query } => api.search_contacts(&query)?,

        ReplCommand::AddBirthday { name, birthday } => {
            api.contact_detail(&name, Birthday, Add(birthday))?
        }
        ReplCommand::ChangeBirthday { name, birthday } => {
            api.contact_detail(&name, Birthday, Change(birthday))?
        }
        ReplCommand::DeleteBirthday { name } => api.contact_detail(&name, Birthday, Delete)?,
        ReplCommand::ShowBirthday { name } => api.contact_detail(&name, Birthday, Show)?,
        ReplCommand::Birthdays { days } => api.upcoming_birthdays(today, days)?,

        ReplCommand::AddEmail { name, email } => api.contact_detail(&name, Email, Add(email))?,
        ReplCommand::ChangeEmail { name, email } => {
            api.contact_detail(&name, Email, Change(email))?
        }
        ReplCommand::DeleteEmail { name } => api.contact_detail(&name, Email, Delete)?,
        ReplCommand::GetEmail { name } => api.contact_detail(&name, Email, Show)?,

        ReplCommand::AddAddress { name, address } => {
            api.contact_detail(&name, Address, Add(address.join(" ")))?
        }
        ReplCommand::ChangeAddress { name, address } => {
            api.contact_detail(&name, Address, Change(address.join(" ")))?
        }
        ReplCommand::DeleteAddress { name } => api.contact_detail(&name, Address, Delete)?,
        ReplCommand::GetAddress { name } => api.contact_detail(&name, Address, Show)?,

        ReplCommand::AddNote { text } => api.add_note(&text.join(" "))?,
        ReplCommand::EditNote { id, text } => api.edit_note(&id, &text.join(" "))?,
        ReplCommand::DeleteNote { id } => api.delete_note(&id)?,
        ReplCommand::AddTag { id, tag } => api.add_tag(&id, &tag)?,
        ReplCommand::DeleteTag { id, tag } => api.delete_tag(&id, &tag)?,
        ReplCommand::FindTag { tag } => api.find_tag(&tag)?,
        ReplCommand::SearchNotes { query } => api.search_notes(&query)?,
        ReplCommand::ShowNotes => api.show_notes()?,

        ReplCommand::Config { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(key), None) => ConfigAction::ShowKey(key),
                (Some(key), Some(value)) => ConfigAction::Set(key, value),
            };
            api.configure(action)?
        }
    };
    Ok(Flow::Output(result))
}

fn print_result(result: &CmdResult) {
    // upcoming birthdays print their heading message before the table
    if !result.birthdays.is_empty() {
        print_messages(&result.messages);
        print_birthdays(&result.birthdays);
        return;
    }
    print_contacts(&result.listed_contacts);
    print_notes(&result.listed_notes);
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
}

fn report_parse_error(e: &clap::Error) {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => print!("{}", e.render()),
        ErrorKind::InvalidSubcommand => println!("Invalid command."),
        _ => {
            println!("Invalid command format.");
            tracing::debug!(error = %e, "could not parse arguments");
            print!("{}", e.render());
        }
    }
}

/// The user-facing line for an error.
pub fn describe_error(e: &AddrBookError) -> String {
    match e {
        AddrBookError::Format(field) => format!("{field}."),
        AddrBookError::ContactNotFound(name) => format!("Contact {name} not found."),
        AddrBookError::PhoneNotFound(phone) => format!("Phone {phone} not found."),
        AddrBookError::NoteNotFound(id) => format!("Note {id} not found."),
        AddrBookError::TagNotFound(tag) => format!("The note has no tag '{tag}'."),
        AddrBookError::AlreadySet(kind) => {
            format!("The {kind} is already set. Use change-{kind} to replace it.")
        }
        AddrBookError::NotSet(kind) => format!("No {kind} is set for this contact."),
        AddrBookError::AlreadyTagged(tag) => format!("The note is already tagged with '{tag}'."),
        AddrBookError::Api(msg) => format!("{msg}."),
        AddrBookError::Io(_) | AddrBookError::Serialization(_) | AddrBookError::Store(_) => {
            format!("Storage problem: {e}")
        }
    }
}
