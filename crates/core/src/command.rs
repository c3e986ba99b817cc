// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use split_engine_domain::{DayInWeek, WeekNumber};
use time::Date;

/// A command represents user intent in the split editor as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set one day's quantity. The day's week becomes locked.
    EditDay {
        /// The date being edited.
        date: Date,
        /// The day-in-week of that date.
        day_in_week: DayInWeek,
        /// The week the date belongs to.
        week_number: WeekNumber,
        /// The new quantity for the day.
        quantity: u64,
    },
    /// Set a week's total and spread it over the week. The week becomes locked.
    EditWeekTotal {
        /// The week being edited.
        week_number: WeekNumber,
        /// The new week total.
        total: u64,
    },
    /// Flip a week between locked and unlocked.
    ToggleLock {
        /// The week to toggle.
        week_number: WeekNumber,
    },
    /// Accept the pending backward redistribution.
    ConfirmBackward,
    /// Discard the pending backward redistribution.
    CancelBackward,
}
