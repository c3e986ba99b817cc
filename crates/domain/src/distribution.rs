// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Even distribution of a week total across the week's eligible days.
//!
//! Weekdays are always eligible. Weekend days are eligible only when they
//! already carry quantity, so weekend work is never introduced automatically.
//! When a week has no eligible day at all, every day becomes eligible.
//!
//! The total is divided evenly and the remainder goes to the earliest
//! eligible days, one unit each, so the result always sums exactly to the
//! requested total.

use crate::types::SplitEntry;

/// Spreads `new_total` across the eligible days of one week.
///
/// The returned entries keep the order and dates of `week_entries`; days that
/// are not eligible are set to zero.
#[must_use]
pub fn distribute_within_week(week_entries: &[SplitEntry], new_total: u64) -> Vec<SplitEntry> {
    if week_entries.is_empty() {
        return Vec::new();
    }

    let mut eligible: Vec<usize> = eligible_days(week_entries);
    if eligible.is_empty() {
        eligible = (0..week_entries.len()).collect();
    }
    eligible.sort_by_key(|&idx| week_entries[idx].day_in_week);

    let Ok(n) = u64::try_from(eligible.len()) else {
        return week_entries.to_vec();
    };
    let base: u64 = new_total / n;
    let remainder: u64 = new_total % n;

    let mut quantities: Vec<u64> = vec![0; week_entries.len()];
    for (position, &idx) in (0_u64..).zip(&eligible) {
        quantities[idx] = base + u64::from(position < remainder);
    }

    week_entries
        .iter()
        .zip(quantities)
        .map(|(entry, quantity)| entry.with_quantity(quantity))
        .collect()
}

/// Indices of weekdays plus weekend days that already carry quantity.
fn eligible_days(week_entries: &[SplitEntry]) -> Vec<usize> {
    week_entries
        .iter()
        .enumerate()
        .filter(|(_, e)| e.day_in_week.is_weekday() || e.quantity > 0)
        .map(|(idx, _)| idx)
        .collect()
}
