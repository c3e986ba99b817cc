// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{DayInWeek, SplitEntry, WeekNumber};
use std::collections::{HashMap, HashSet};
use time::{Date, Duration};

/// Validates a generated split before it is handed to the engine.
///
/// # Arguments
///
/// * `entries` - The split entries as produced by the scheduling call
///
/// # Errors
///
/// Returns an error if:
/// - A week number is zero
/// - A date appears more than once
/// - A recorded day-in-week disagrees with the date's weekday
/// - Dates of one week span more than one calendar week, two week numbers
///   share a calendar week, or week numbers decrease as dates increase
pub fn validate_entries(entries: &[SplitEntry]) -> Result<(), DomainError> {
    let mut seen_dates: HashSet<Date> = HashSet::new();
    let mut monday_of_week: HashMap<WeekNumber, Date> = HashMap::new();
    let mut week_of_monday: HashMap<Date, WeekNumber> = HashMap::new();

    for entry in entries {
        if entry.week_number.value() == 0 {
            return Err(DomainError::InvalidWeekNumber(0));
        }

        if !seen_dates.insert(entry.date) {
            return Err(DomainError::DuplicateDate(entry.date));
        }

        let actual: DayInWeek = DayInWeek::from_date(entry.date);
        if actual != entry.day_in_week {
            return Err(DomainError::DayInWeekMismatch {
                date: entry.date,
                recorded: entry.day_in_week.value(),
                actual: actual.value(),
            });
        }

        let monday: Date = entry.date - Duration::days(i64::from(actual.value()) - 1);
        let out_of_order: DomainError = DomainError::WeekNumberOutOfOrder {
            date: entry.date,
            week_number: entry.week_number,
        };
        if *monday_of_week.entry(entry.week_number).or_insert(monday) != monday {
            return Err(out_of_order);
        }
        if *week_of_monday.entry(monday).or_insert(entry.week_number) != entry.week_number {
            return Err(out_of_order);
        }
    }

    let mut by_date: Vec<&SplitEntry> = entries.iter().collect();
    by_date.sort_by_key(|e| e.date);
    for pair in by_date.windows(2) {
        if pair[1].week_number < pair[0].week_number {
            return Err(DomainError::WeekNumberOutOfOrder {
                date: pair[1].date,
                week_number: pair[1].week_number,
            });
        }
    }

    Ok(())
}

/// Finds the entry for `date` and checks it sits in the expected week and day.
///
/// # Errors
///
/// Returns `DomainError::EntryNotFound` when no entry has `date`, or
/// `DomainError::EntryMismatch` when the entry's week or day differ.
pub fn locate_entry(
    entries: &[SplitEntry],
    date: Date,
    week_number: WeekNumber,
    day_in_week: DayInWeek,
) -> Result<usize, DomainError> {
    let idx: usize = entries
        .iter()
        .position(|e| e.date == date)
        .ok_or(DomainError::EntryNotFound(date))?;

    let entry: &SplitEntry = &entries[idx];
    if entry.week_number != week_number || entry.day_in_week != day_in_week {
        return Err(DomainError::EntryMismatch {
            date,
            week_number: entry.week_number,
            day_in_week: entry.day_in_week.value(),
        });
    }
    Ok(idx)
}
