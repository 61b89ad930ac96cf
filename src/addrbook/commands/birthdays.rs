use crate::birthdays::BirthdayWindow;
use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use chrono::NaiveDate;

pub fn run(book: &AddressBook, today: NaiveDate, window: BirthdayWindow) -> Result<CmdResult> {
    let upcoming = book.get_upcoming_birthdays(today, window);
    let days = window.days;
    let message = if upcoming.is_empty() {
        CmdMessage::info(format!("No upcoming birthdays in the next {days} days."))
    } else {
        CmdMessage::info(format!("Upcoming birthdays in the next {days} days:"))
    };
    Ok(CmdResult::default()
        .with_birthdays(upcoming)
        .with_message(message))
}
