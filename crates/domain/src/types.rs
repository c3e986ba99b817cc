// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Calendar date format used by split entries (`YYYY-MM-DD`).
pub const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// 1-based index of a week within a job's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekNumber(u32);

impl WeekNumber {
    /// Creates a week number. Zero is representable but rejected by validation.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a day within its week, 1 = Monday through 7 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayInWeek(u8);

impl DayInWeek {
    /// Creates a day-in-week value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDayInWeek` unless `value` is in `1..=7`.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (1..=7).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidDayInWeek(value))
        }
    }

    /// Derives the day-in-week from a calendar date.
    #[must_use]
    pub const fn from_date(date: Date) -> Self {
        Self(date.weekday().number_from_monday())
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Monday through Friday.
    #[must_use]
    pub const fn is_weekday(self) -> bool {
        self.0 <= 5
    }
}

impl TryFrom<u8> for DayInWeek {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DayInWeek> for u8 {
    fn from(day: DayInWeek) -> Self {
        day.0
    }
}

/// One day's allocation of a job's quantity.
///
/// Only `quantity` changes once entries have been generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitEntry {
    /// The calendar date.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// The week this day belongs to.
    pub week_number: WeekNumber,
    /// The position of the day within its week.
    pub day_in_week: DayInWeek,
    /// Pieces allocated to this day.
    pub quantity: u64,
}

impl SplitEntry {
    /// Creates a new split entry.
    #[must_use]
    pub const fn new(
        date: Date,
        week_number: WeekNumber,
        day_in_week: DayInWeek,
        quantity: u64,
    ) -> Self {
        Self {
            date,
            week_number,
            day_in_week,
            quantity,
        }
    }

    /// Returns a copy of this entry carrying a different quantity.
    #[must_use]
    pub fn with_quantity(&self, quantity: u64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

/// Per-week lock flags. A week with no entry is unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LockMap(BTreeMap<WeekNumber, bool>);

impl LockMap {
    /// Creates an empty lock map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Checks whether a week is locked.
    #[must_use]
    pub fn is_locked(&self, week: WeekNumber) -> bool {
        self.0.get(&week).copied().unwrap_or(false)
    }

    /// Sets a week to an explicit lock state.
    pub fn set(&mut self, week: WeekNumber, locked: bool) {
        self.0.insert(week, locked);
    }

    /// Locks a week.
    pub fn lock(&mut self, week: WeekNumber) {
        self.set(week, true);
    }

    /// Returns all locked weeks in ascending order.
    #[must_use]
    pub fn locked_weeks(&self) -> Vec<WeekNumber> {
        self.0
            .iter()
            .filter(|(_, locked)| **locked)
            .map(|(week, _)| *week)
            .collect()
    }

    /// Filters `weeks` down to those that are unlocked, keeping their order.
    #[must_use]
    pub fn unlocked_weeks(&self, weeks: &[WeekNumber]) -> Vec<WeekNumber> {
        weeks
            .iter()
            .copied()
            .filter(|week| !self.is_locked(*week))
            .collect()
    }
}

impl FromIterator<(WeekNumber, bool)> for LockMap {
    fn from_iter<I: IntoIterator<Item = (WeekNumber, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Checks whether `week` is locked in `locks`.
#[must_use]
pub fn is_week_locked(locks: &LockMap, week: WeekNumber) -> bool {
    locks.is_locked(week)
}

/// Returns a new lock map with `week` flipped.
#[must_use]
pub fn toggle_lock(locks: &LockMap, week: WeekNumber) -> LockMap {
    let mut toggled: LockMap = locks.clone();
    toggled.set(week, !locks.is_locked(week));
    toggled
}
