//! # Upcoming Birthdays
//!
//! For each contact with a birthday, the next anniversary on or after `today` is
//! computed and kept if it falls inside the lookahead window.
//!
//! ## Window
//!
//! The window is half-open: with `days = 7`, a birthday today (0 days out) through
//! six days out is included, and one exactly seven days out is not. A window of
//! zero days never matches anything.
//!
//! ## Leap days
//!
//! A Feb 29 birthday is celebrated on Feb 28 in years without a Feb 29.
//!
//! ## Weekend shift
//!
//! With `shift_weekends`, an anniversary falling on Saturday or Sunday is reported
//! on the following Monday. Inclusion is still decided on the real date, so the
//! reported date may land just past the window.
//!
//! ## Ordering
//!
//! Results are sorted by reported date, then by name, so the output does not depend
//! on how the book happens to iterate.

use crate::fields::Birthday;
use crate::model::Record;
use chrono::{Datelike, Days, NaiveDate, Weekday};

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Lookahead settings for [`upcoming`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub days: u32,
    pub shift_weekends: bool,
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
            shift_weekends: false,
        }
    }
}

impl BirthdayWindow {
    pub fn days(days: u32) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    pub fn with_weekend_shift(mut self, shift_weekends: bool) -> Self {
        self.shift_weekends = shift_weekends;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    pub birthday: Birthday,
    /// The day to congratulate: the anniversary, moved off weekends if requested.
    pub date: NaiveDate,
    /// Days from `today` to the actual anniversary.
    pub days_until: u32,
}

/// The birthday's anniversary in `year`, with Feb 29 clamped to Feb 28.
pub fn anniversary_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).or_else(|| {
        // only Feb 29 can be missing from a year
        NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1)
    })
}

/// The first anniversary on or after `today`.
pub fn next_anniversary(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birthday, today.year())?;
    if this_year < today {
        anniversary_in(birthday, today.year() + 1)
    } else {
        Some(this_year)
    }
}

/// Moves Saturday and Sunday to the following Monday.
pub fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let days = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return date,
    };
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

pub fn upcoming<'a, I>(records: I, today: NaiveDate, window: BirthdayWindow) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut found: Vec<UpcomingBirthday> = records
        .into_iter()
        .filter_map(|record| {
            let birthday = *record.birthday()?;
            let anniversary = next_anniversary(birthday.date(), today)?;
            let delta = (anniversary - today).num_days();
            let days_until = u32::try_from(delta).ok()?;
            if days_until >= window.days {
                return None;
            }
            let date = if window.shift_weekends {
                shift_off_weekend(anniversary)
            } else {
                anniversary
            };
            Some(UpcomingBirthday {
                name: record.name().to_string(),
                birthday,
                date,
                days_until,
            })
        })
        .collect();

    found.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
    found
}
