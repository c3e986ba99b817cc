// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod distribution;
mod error;
mod grouping;
mod redistribution;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use distribution::distribute_within_week;
pub use error::DomainError;
pub use grouping::{
    WeekGroups, current_week_total, grand_total, group_by_week, sorted_weeks, week_total,
};
pub use redistribution::{DivisionRounding, redistribute, redistribute_with};
pub use types::{
    DayInWeek, ISO_DATE, LockMap, SplitEntry, WeekNumber, is_week_locked, parse_date,
    toggle_lock,
};
pub use validation::{locate_entry, validate_entries};
