// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use split_engine_domain::{
    DivisionRounding, LockMap, SplitEntry, WeekGroups, WeekNumber, current_week_total,
    grand_total, group_by_week, sorted_weeks,
};

/// Engine behaviour that callers may tune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How deltas are divided between target weeks.
    pub rounding: DivisionRounding,
}

/// A week edit whose compensation must be taken from earlier weeks.
///
/// Raised when no later unlocked week can absorb the difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingWeekChange {
    /// The edited week.
    pub week_number: WeekNumber,
    /// The edited week's total after the edit.
    pub new_total: u64,
    /// The edited week's total before the edit.
    pub old_total: u64,
}

impl PendingWeekChange {
    /// The delta to apply to earlier weeks: the opposite of the edit's change.
    #[must_use]
    pub fn backward_delta(&self) -> i64 {
        signed_difference(self.old_total, self.new_total)
    }
}

/// Progress of a backward-redistribution confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConfirmationState {
    /// Nothing awaits confirmation.
    #[default]
    Idle,
    /// A backward redistribution awaits confirm or cancel.
    Pending(PendingWeekChange),
}

/// The complete split editor state for one job.
///
/// States are never mutated in place; every transition produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitState {
    /// The authoritative job total the split should add up to.
    pub total_quantity: u64,
    /// One entry per scheduled day.
    pub entries: Vec<SplitEntry>,
    /// Per-week lock flags.
    #[serde(default)]
    pub locks: LockMap,
    /// Backward-redistribution confirmation progress.
    #[serde(default)]
    pub confirmation: ConfirmationState,
}

impl SplitState {
    /// Creates an idle state from externally supplied entries and locks.
    #[must_use]
    pub const fn new(total_quantity: u64, entries: Vec<SplitEntry>, locks: LockMap) -> Self {
        Self {
            total_quantity,
            entries,
            locks,
            confirmation: ConfirmationState::Idle,
        }
    }

    /// Entries grouped by week.
    #[must_use]
    pub fn grouped(&self) -> WeekGroups {
        group_by_week(&self.entries)
    }

    /// All week numbers, ascending.
    #[must_use]
    pub fn weeks(&self) -> Vec<WeekNumber> {
        sorted_weeks(&self.grouped())
    }

    /// Total of one week.
    #[must_use]
    pub fn week_total(&self, week: WeekNumber) -> u64 {
        current_week_total(&self.grouped(), week)
    }

    /// Sum of all day quantities.
    #[must_use]
    pub fn grand_total(&self) -> u64 {
        grand_total(&self.entries)
    }

    /// Quantity still to be placed (positive) or over-allocated (negative).
    #[must_use]
    pub fn difference(&self) -> i64 {
        signed_difference(self.total_quantity, self.grand_total())
    }

    /// The pending backward change, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&PendingWeekChange> {
        match &self.confirmation {
            ConfirmationState::Idle => None,
            ConfirmationState::Pending(change) => Some(change),
        }
    }
}

/// Unlocked weeks after `week`, ascending.
#[must_use]
pub fn forward_targets(
    entries: &[SplitEntry],
    locks: &LockMap,
    week: WeekNumber,
) -> Vec<WeekNumber> {
    let later: Vec<WeekNumber> = sorted_weeks(&group_by_week(entries))
        .into_iter()
        .filter(|w| *w > week)
        .collect();
    locks.unlocked_weeks(&later)
}

/// Unlocked weeks before `week`, ascending.
#[must_use]
pub fn backward_targets(
    entries: &[SplitEntry],
    locks: &LockMap,
    week: WeekNumber,
) -> Vec<WeekNumber> {
    let earlier: Vec<WeekNumber> = sorted_weeks(&group_by_week(entries))
        .into_iter()
        .filter(|w| *w < week)
        .collect();
    locks.unlocked_weeks(&earlier)
}

/// How an accepted command resolved the job total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditOutcome {
    /// The split already matched the job total after the edit.
    Balanced,
    /// The difference was spread over other unlocked weeks.
    Redistributed {
        /// The weeks that received the delta, in processing order.
        weeks: Vec<WeekNumber>,
        /// The delta that was spread.
        delta: i64,
        /// Difference left after redistribution (non-zero when weeks hit zero).
        remaining: i64,
    },
    /// Later weeks are all locked; earlier weeks need explicit confirmation.
    ConfirmationRequired(PendingWeekChange),
    /// No unlocked week can absorb the difference.
    Unresolved {
        /// The difference between the job total and the split.
        difference: i64,
    },
    /// A week's lock flag was flipped.
    LockToggled {
        /// The toggled week.
        week_number: WeekNumber,
        /// The week's lock state after the toggle.
        locked: bool,
    },
    /// The pending backward change was discarded.
    Cancelled(PendingWeekChange),
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: SplitState,
    /// How the transition resolved the job total.
    pub outcome: EditOutcome,
}

/// `minuend - subtrahend` as a signed value, clamped to the `i64` range.
pub(crate) fn signed_difference(minuend: u64, subtrahend: u64) -> i64 {
    let wide: i128 = i128::from(minuend) - i128::from(subtrahend);
    i64::try_from(wide).unwrap_or(if wide < 0 { i64::MIN } else { i64::MAX })
}
