// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{ApiResponse, EditDayRequest, EditWeekTotalRequest, SplitEditorView, load_state};
use split_engine::{EngineConfig, SplitState};
use split_engine_domain::{DayInWeek, LockMap, SplitEntry, WeekNumber, grand_total};
use time::macros::date;
use time::{Date, Duration};

/// Monday of week 1.
pub const FIRST_MONDAY: Date = date!(2026 - 03 - 02);

pub const STANDARD_WEEK: [u64; 7] = [10, 10, 10, 10, 10, 0, 0];

pub fn create_test_entries(weeks: &[[u64; 7]]) -> Vec<SplitEntry> {
    let mut entries: Vec<SplitEntry> = Vec::new();
    for (week_idx, quantities) in weeks.iter().enumerate() {
        let week_number: WeekNumber = WeekNumber::new(u32::try_from(week_idx + 1).unwrap());
        for (offset, &quantity) in quantities.iter().enumerate() {
            let date: Date = FIRST_MONDAY
                + Duration::weeks(i64::try_from(week_idx).unwrap())
                + Duration::days(i64::try_from(offset).unwrap());
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

/// Loads a balanced state through the API.
pub fn create_test_state(weeks: &[[u64; 7]]) -> SplitState {
    let entries: Vec<SplitEntry> = create_test_entries(weeks);
    let total: u64 = grand_total(&entries);
    load_state(total, entries, LockMap::new()).unwrap()
}

pub fn create_test_config() -> EngineConfig {
    EngineConfig::default()
}

pub fn edit_day_request(
    date: &str,
    week_number: u32,
    day_in_week: u8,
    quantity: &str,
) -> EditDayRequest {
    EditDayRequest {
        date: String::from(date),
        day_in_week,
        week_number,
        quantity: String::from(quantity),
    }
}

pub fn edit_week_request(week_number: u32, total: &str) -> EditWeekTotalRequest {
    EditWeekTotalRequest {
        week_number,
        total: String::from(total),
    }
}

/// Week totals as shown in the editor view.
pub fn view_totals(view: &SplitEditorView) -> Vec<u64> {
    view.weeks.iter().map(|w| w.total).collect()
}

/// Three standard weeks with week 3 raised to 60, awaiting confirmation.
pub fn create_pending_state() -> SplitState {
    let state: SplitState = create_test_state(&[STANDARD_WEEK; 3]);
    let result: ApiResponse = crate::edit_week_total(
        &state,
        &edit_week_request(3, "60"),
        &create_test_config(),
    )
    .unwrap();
    result.new_state
}
