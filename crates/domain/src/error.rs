// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::WeekNumber;
use time::Date;

/// Errors that can occur while validating or addressing split entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Day-in-week value outside 1 (Monday) ..= 7 (Sunday).
    InvalidDayInWeek(u8),
    /// Week numbers are 1-based.
    InvalidWeekNumber(u32),
    /// The same date appears more than once in a split.
    DuplicateDate(Date),
    /// The day-in-week recorded for a date does not match its weekday.
    DayInWeekMismatch {
        /// The entry date.
        date: Date,
        /// The recorded day-in-week.
        recorded: u8,
        /// The day-in-week derived from the date.
        actual: u8,
    },
    /// Entries are not grouped into consistent calendar weeks.
    WeekNumberOutOfOrder {
        /// The offending entry date.
        date: Date,
        /// The week number recorded for it.
        week_number: WeekNumber,
    },
    /// No entry exists for the given date.
    EntryNotFound(Date),
    /// The entry for a date belongs to a different week or day than requested.
    EntryMismatch {
        /// The entry date.
        date: Date,
        /// The week number recorded on the entry.
        week_number: WeekNumber,
        /// The day-in-week recorded on the entry.
        day_in_week: u8,
    },
    /// No entries exist for the given week.
    WeekNotFound(WeekNumber),
    /// Failed to parse a date string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDayInWeek(day) => {
                write!(f, "Invalid day in week: {day}. Must be between 1 and 7")
            }
            Self::InvalidWeekNumber(week) => {
                write!(f, "Invalid week number: {week}. Must be at least 1")
            }
            Self::DuplicateDate(date) => write!(f, "Date {date} appears more than once"),
            Self::DayInWeekMismatch {
                date,
                recorded,
                actual,
            } => {
                write!(
                    f,
                    "Date {date} is recorded as day {recorded} but falls on day {actual}"
                )
            }
            Self::WeekNumberOutOfOrder { date, week_number } => {
                write!(
                    f,
                    "Date {date} is assigned to week {week_number}, which is inconsistent with neighbouring entries"
                )
            }
            Self::EntryNotFound(date) => write!(f, "No split entry exists for {date}"),
            Self::EntryMismatch {
                date,
                week_number,
                day_in_week,
            } => {
                write!(
                    f,
                    "Split entry for {date} belongs to week {week_number}, day {day_in_week}"
                )
            }
            Self::WeekNotFound(week) => write!(f, "Week {week} has no split entries"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
