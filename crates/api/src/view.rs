// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::{BalanceStatus, DayView, SplitEditorView, WeekView};
use split_engine::SplitState;
use split_engine_domain::{WeekGroups, week_total};

/// Builds the split editor view for a state.
#[must_use]
pub fn build_view(state: &SplitState) -> SplitEditorView {
    let grouped: WeekGroups = state.grouped();
    let weeks: Vec<WeekView> = grouped
        .iter()
        .map(|(week_number, entries)| WeekView {
            week_number: week_number.value(),
            locked: state.locks.is_locked(*week_number),
            total: week_total(entries),
            days: entries
                .iter()
                .map(|e| DayView {
                    date: e.date.to_string(),
                    day_in_week: e.day_in_week.value(),
                    quantity: e.quantity,
                })
                .collect(),
        })
        .collect();

    let difference: i64 = state.difference();
    SplitEditorView {
        total_quantity: state.total_quantity,
        grand_total: state.grand_total(),
        difference,
        balance: BalanceStatus::from_difference(difference),
        weeks,
        pending: state.pending().copied(),
    }
}
