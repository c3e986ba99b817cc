// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DayInWeek, SplitEntry, WeekNumber};
use time::macros::date;
use time::{Date, Duration};

/// Monday of the first scheduled week used throughout the tests.
pub const FIRST_MONDAY: Date = date!(2026 - 03 - 02);

/// Builds a schedule of consecutive full weeks (Monday..Sunday), one
/// quantity array per week.
pub fn create_test_schedule(weeks: &[[u64; 7]]) -> Vec<SplitEntry> {
    let mut entries: Vec<SplitEntry> = Vec::new();
    for (week_idx, quantities) in weeks.iter().enumerate() {
        let week_number: WeekNumber = WeekNumber::new(u32::try_from(week_idx + 1).unwrap());
        let monday: Date = FIRST_MONDAY + Duration::weeks(i64::try_from(week_idx).unwrap());
        for (offset, &quantity) in quantities.iter().enumerate() {
            let date: Date = monday + Duration::days(i64::try_from(offset).unwrap());
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
