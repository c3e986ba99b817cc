// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SplitState;
use split_engine_domain::{DayInWeek, LockMap, SplitEntry, WeekNumber, grand_total};
use time::macros::date;
use time::{Date, Duration};

/// Monday of week 1 in every test schedule.
pub const FIRST_MONDAY: Date = date!(2026 - 03 - 02);

/// Ten pieces on each weekday, nothing at the weekend.
pub const STANDARD_WEEK: [u64; 7] = [10, 10, 10, 10, 10, 0, 0];

/// Builds consecutive Monday..Sunday weeks from per-day quantities.
pub fn create_test_entries(weeks: &[[u64; 7]]) -> Vec<SplitEntry> {
    let mut entries: Vec<SplitEntry> = Vec::new();
    for (week_idx, quantities) in weeks.iter().enumerate() {
        let week_number: WeekNumber = WeekNumber::new(u32::try_from(week_idx + 1).unwrap());
        for (offset, &quantity) in quantities.iter().enumerate() {
            let date: Date = day_of(week_idx + 1, offset + 1);
            entries.push(SplitEntry::new(
                date,
                week_number,
                DayInWeek::from_date(date),
                quantity,
            ));
        }
    }
    entries
}

/// A balanced state (job total equals the split total) with `locked` weeks locked.
pub fn create_test_state(weeks: &[[u64; 7]], locked: &[u32]) -> SplitState {
    let entries: Vec<SplitEntry> = create_test_entries(weeks);
    let total: u64 = grand_total(&entries);
    let locks: LockMap = locked
        .iter()
        .map(|&w| (WeekNumber::new(w), true))
        .collect();
    SplitState::new(total, entries, locks)
}

/// The date of `day` (1 = Monday) in `week` (1-based).
pub fn day_of(week: usize, day: usize) -> Date {
    FIRST_MONDAY
        + Duration::weeks(i64::try_from(week - 1).unwrap())
        + Duration::days(i64::try_from(day - 1).unwrap())
}

pub fn week(number: u32) -> WeekNumber {
    WeekNumber::new(number)
}

pub fn day(value: u8) -> DayInWeek {
    DayInWeek::new(value).unwrap()
}

/// Week totals of `state`, weeks 1..=`count`.
pub fn week_totals(state: &SplitState, count: u32) -> Vec<u64> {
    (1..=count).map(|w| state.week_total(week(w))).collect()
}

/// Day quantities of one week of `state`, Monday first.
pub fn week_days(state: &SplitState, number: u32) -> Vec<u64> {
    state.grouped()[&week(number)]
        .iter()
        .map(|e| e.quantity)
        .collect()
}
