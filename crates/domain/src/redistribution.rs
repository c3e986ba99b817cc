// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Apportioning a signed quantity delta across a list of target weeks.
//!
//! Callers are responsible for passing only unlocked weeks; this module
//! writes to every week it is given and leaves all other entries untouched.

use crate::distribution::distribute_within_week;
use crate::grouping::{WeekGroups, week_total};
use crate::types::{SplitEntry, WeekNumber};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use time::Date;

/// How a signed delta is divided by the number of target weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DivisionRounding {
    /// Floor division, as the legacy split editor computed it. Negative
    /// deltas that do not divide evenly remove more than requested.
    #[default]
    Floor,
    /// Truncating division. The whole delta is absorbed unless a week
    /// floors at zero.
    TowardZero,
}

impl DivisionRounding {
    /// Divides `delta` by a positive `divisor`.
    #[must_use]
    pub const fn divide(self, delta: i64, divisor: i64) -> i64 {
        match self {
            Self::TowardZero => delta / divisor,
            Self::Floor => delta.div_euclid(divisor),
        }
    }
}

impl std::fmt::Display for DivisionRounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TowardZero => write!(f, "toward-zero"),
            Self::Floor => write!(f, "floor"),
        }
    }
}

/// Redistributes `delta` across `target_weeks` with the default rounding.
///
/// See [`redistribute_with`].
#[must_use]
pub fn redistribute(
    entries: &[SplitEntry],
    target_weeks: &[WeekNumber],
    delta: i64,
    grouped: &WeekGroups,
) -> Vec<SplitEntry> {
    redistribute_with(
        entries,
        target_weeks,
        delta,
        grouped,
        DivisionRounding::default(),
    )
}

/// Redistributes `delta` across `target_weeks`.
///
/// Each target receives an equal share of the delta, and the first
/// `|delta| mod n` targets (in the order given) receive one extra unit in
/// the direction of the delta. A week's new total never drops below zero;
/// the shortfall is not pushed onto other weeks. Each adjusted week total is
/// then spread over the week with [`distribute_within_week`].
///
/// Week totals are read from `grouped`, and target weeks missing from it
/// are skipped.
#[must_use]
pub fn redistribute_with(
    entries: &[SplitEntry],
    target_weeks: &[WeekNumber],
    delta: i64,
    grouped: &WeekGroups,
    rounding: DivisionRounding,
) -> Vec<SplitEntry> {
    let Ok(week_count) = i64::try_from(target_weeks.len()) else {
        return entries.to_vec();
    };
    if week_count == 0 || delta == 0 {
        return entries.to_vec();
    }

    let per_week: i64 = rounding.divide(delta, week_count);
    let week_remainder: u64 = delta.unsigned_abs() % week_count.unsigned_abs();

    let mut updates: HashMap<Date, u64> = HashMap::new();
    for (position, week) in (0_u64..).zip(target_weeks) {
        let Some(week_entries) = grouped.get(week) else {
            continue;
        };

        let takes_remainder: bool = position < week_remainder;
        let adjustment: i64 = per_week + if takes_remainder { delta.signum() } else { 0 };

        let adjusted: i128 = i128::from(week_total(week_entries)) + i128::from(adjustment);
        let new_week_total: u64 = u64::try_from(adjusted.max(0)).unwrap_or(u64::MAX);

        for entry in distribute_within_week(week_entries, new_week_total) {
            updates.insert(entry.date, entry.quantity);
        }
    }

    entries
        .iter()
        .map(|entry| {
            updates
                .get(&entry.date)
                .map_or_else(|| entry.clone(), |&quantity| entry.with_quantity(quantity))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::grouping::{current_week_total, grand_total, group_by_week};
    use crate::types::DayInWeek;
    use time::Duration;
    use time::macros::date;

    /// Builds `totals.len()` Monday..Friday weeks starting 2026-03-02,
    /// each week's quantity spread evenly.
    fn weeks_with_totals(totals: &[u64]) -> Vec<SplitEntry> {
        let first_monday: Date = date!(2026 - 03 - 02);
        let mut entries: Vec<SplitEntry> = Vec::new();
        for (week_idx, &total) in totals.iter().enumerate() {
            let week: WeekNumber = WeekNumber::new(u32::try_from(week_idx + 1).unwrap());
            let monday: Date =
                first_monday + Duration::weeks(i64::try_from(week_idx).unwrap());
            let days: Vec<SplitEntry> = (0..5)
                .map(|offset| {
                    let day: Date = monday + Duration::days(offset);
                    SplitEntry::new(day, week, DayInWeek::from_date(day), 0)
                })
                .collect();
            entries.extend(distribute_within_week(&days, total));
        }
        entries
    }

    fn totals(entries: &[SplitEntry], weeks: &[u32]) -> Vec<u64> {
        let grouped: WeekGroups = group_by_week(entries);
        weeks
            .iter()
            .map(|&w| current_week_total(&grouped, WeekNumber::new(w)))
            .collect()
    }

    fn weeks(numbers: &[u32]) -> Vec<WeekNumber> {
        numbers.iter().copied().map(WeekNumber::new).collect()
    }

    #[test]
    fn test_positive_delta_splits_evenly() {
        let entries: Vec<SplitEntry> = weeks_with_totals(&[30, 50, 40]);
        let grouped: WeekGroups = group_by_week(&entries);

        let result: Vec<SplitEntry> = redistribute(&entries, &weeks(&[2, 3]), 10, &grouped);

        assert_eq!(totals(&result, &[1, 2, 3]), vec![30, 55, 45]);
    }

    #[test]
    fn test_negative_delta_toward_zero_conserves_delta() {
        let entries: Vec<SplitEntry> = weeks_with_totals(&[30, 30, 30]);
        let grouped: WeekGroups = group_by_week(&entries);

        let result: Vec<SplitEntry> = redistribute_with(
            &entries,
            &weeks(&[1, 2, 3]),
            -7,
            &grouped,
            DivisionRounding::TowardZero,
        );

        assert_eq!(totals(&result, &[1, 2, 3]), vec![27, 28, 28]);
        assert_eq!(grand_total(&entries) - grand_total(&result), 7);
    }

    #[test]
    fn test_negative_delta_floor_matches_legacy_editor() {
        let entries: Vec<SplitEntry> = weeks_with_totals(&[30, 30, 30]);
        let grouped: WeekGroups = group_by_week(&entries);

        let result: Vec<SplitEntry> = redistribute_with(
            &entries,
            &weeks(&[1, 2, 3]),
            -7,
            &grouped,
            DivisionRounding::Floor,
        );

        // floor(-7 / 3) = -3, remainder unit goes to week 1 only
        assert_eq!(totals(&result, &[1, 2, 3]), vec![26, 27, 27]);
    }

    #[test]
    fn test_positive_remainder_goes_to_first_targets_in_argument_order() {
        let entries: Vec<SplitEntry> = weeks_with_totals(&[10, 10, 10]);
        let grouped: WeekGroups = group_by_week(&entries);

        let result: Vec<SplitEntry> = redistribute(&entries, &weeks(&[3, 1]), 5, &grouped);

        assert_eq!(totals(&result, &[1, 2, 3]), vec![12, 10, 13]);
    }

    #[test]
    fn test_week_total_floors_at_zero() {
        let entries: Vec<SplitEntry> = weeks_with_totals(&[2, 40]);
        let grouped: WeekGroups = group_by_week(&entries);

        let result: Vec<SplitEntry> = redistribute(&entries, &weeks(&[1, 2]), -20, &grouped);

        assert_eq!(totals(&result, &[1, 2]), vec![0, 30]);
        // the 8 units week 1 could not give up are not taken from week 2
        assert_eq!(grand_total(&result), 30);
    }

    #[test]
    fn test_noop_cases_return_entries_unchanged() {
        let entries: Vec<SplitEntry> = weeks_with_totals(&[10, 20]);
        let grouped: WeekGroups = group_by_week(&entries);

        assert_eq!(redistribute(&entries, &[], 15, &grouped), entries);
        assert_eq!(redistribute(&entries, &weeks(&[1]), 0, &grouped), entries);
    }

    #[test]
    fn test_unknown_target_week_is_skipped() {
        let entries: Vec<SplitEntry> = weeks_with_totals(&[10, 20]);
        let grouped: WeekGroups = group_by_week(&entries);

        let result: Vec<SplitEntry> = redistribute(&entries, &weeks(&[2, 9]), 10, &grouped);

        assert_eq!(totals(&result, &[1, 2]), vec![10, 25]);
    }

    #[test]
    fn test_untargeted_weeks_are_untouched() {
        let entries: Vec<SplitEntry> = weeks_with_totals(&[13, 20, 7]);
        let grouped: WeekGroups = group_by_week(&entries);

        let result: Vec<SplitEntry> = redistribute(&entries, &weeks(&[2]), -4, &grouped);

        let others_before: Vec<&SplitEntry> =
            entries.iter().filter(|e| e.week_number.value() != 2).collect();
        let others_after: Vec<&SplitEntry> =
            result.iter().filter(|e| e.week_number.value() != 2).collect();
        assert_eq!(others_before, others_after);
    }

    #[test]
    fn test_division_rounding_modes() {
        assert_eq!(DivisionRounding::TowardZero.divide(-7, 3), -2);
        assert_eq!(DivisionRounding::Floor.divide(-7, 3), -3);
        assert_eq!(DivisionRounding::TowardZero.divide(7, 3), 2);
        assert_eq!(DivisionRounding::Floor.divide(7, 3), 2);
        assert_eq!(DivisionRounding::default(), DivisionRounding::Floor);
    }

    #[test]
    fn test_default_rounding_is_floor() {
        let entries: Vec<SplitEntry> = weeks_with_totals(&[30, 30, 30]);
        let grouped: WeekGroups = group_by_week(&entries);

        let result: Vec<SplitEntry> = redistribute(&entries, &weeks(&[1, 2, 3]), -7, &grouped);

        assert_eq!(totals(&result, &[1, 2, 3]), vec![26, 27, 27]);
        assert_eq!(grand_total(&entries) - grand_total(&result), 8);
    }

    #[test]
    fn test_extreme_delta_floors_targets_at_zero() {
        let entries: Vec<SplitEntry> = weeks_with_totals(&[30, 30, 30]);
        let grouped: WeekGroups = group_by_week(&entries);

        let result: Vec<SplitEntry> =
            redistribute(&entries, &weeks(&[2, 3]), i64::MIN, &grouped);

        assert_eq!(totals(&result, &[1, 2, 3]), vec![30, 0, 0]);
    }
}
