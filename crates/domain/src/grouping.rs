// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grouping of a flat split into per-week buckets.

use crate::types::{SplitEntry, WeekNumber};
use std::collections::BTreeMap;

/// Split entries keyed by week, each bucket sorted by day-in-week.
pub type WeekGroups = BTreeMap<WeekNumber, Vec<SplitEntry>>;

/// Groups entries by week number.
///
/// Every bucket is sorted ascending by `day_in_week`.
#[must_use]
pub fn group_by_week(entries: &[SplitEntry]) -> WeekGroups {
    let mut grouped: WeekGroups = BTreeMap::new();
    for entry in entries {
        grouped
            .entry(entry.week_number)
            .or_default()
            .push(entry.clone());
    }
    for week_entries in grouped.values_mut() {
        week_entries.sort_by_key(|e| e.day_in_week);
    }
    grouped
}

/// Returns the week numbers present in `grouped`, ascending.
#[must_use]
pub fn sorted_weeks(grouped: &WeekGroups) -> Vec<WeekNumber> {
    grouped.keys().copied().collect()
}

/// Sum of the quantities of one week's entries, saturating at `u64::MAX`.
#[must_use]
pub fn week_total(week_entries: &[SplitEntry]) -> u64 {
    week_entries
        .iter()
        .fold(0, |sum, e| sum.saturating_add(e.quantity))
}

/// Sum of every quantity in the split.
///
/// Alias of [`week_total`] applied to the whole split rather than one bucket.
#[must_use]
pub fn grand_total(entries: &[SplitEntry]) -> u64 {
    week_total(entries)
}

/// Total of a single week, or zero when the week has no entries.
#[must_use]
pub fn current_week_total(grouped: &WeekGroups, week: WeekNumber) -> u64 {
    grouped.get(&week).map_or(0, |entries| week_total(entries))
}
