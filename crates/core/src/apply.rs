// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{
    ConfirmationState, EditOutcome, EngineConfig, PendingWeekChange, SplitState, TransitionResult,
    backward_targets, forward_targets, signed_difference,
};
use split_engine_domain::{
    DayInWeek, DomainError, LockMap, SplitEntry, WeekGroups, WeekNumber, distribute_within_week,
    group_by_week, locate_entry, redistribute_with, toggle_lock, week_total,
};
use std::collections::HashMap;
use time::Date;
use tracing::debug;

/// Applies a command to the current state, producing a new state and outcome.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `config` - Engine behaviour settings
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and how the job total was resolved
/// * `Err(CoreError)` if the command is invalid in the current state
///
/// # Errors
///
/// Returns an error if:
/// - An edit or toggle arrives while a backward redistribution is pending
/// - Confirm or cancel arrives while nothing is pending
/// - The command references a date or week that is not part of the split
pub fn apply(
    state: &SplitState,
    command: Command,
    config: &EngineConfig,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::EditDay {
            date,
            day_in_week,
            week_number,
            quantity,
        } => edit_day(state, date, day_in_week, week_number, quantity, config),
        Command::EditWeekTotal { week_number, total } => {
            edit_week_total(state, week_number, total, config)
        }
        Command::ToggleLock { week_number } => toggle_week_lock(state, week_number),
        Command::ConfirmBackward => confirm_backward(state, config),
        Command::CancelBackward => cancel_backward(state),
    }
}

/// Sets one day's quantity, locks its week and rebalances the job total.
///
/// Only the edited day changes within its week. The remaining difference
/// against the job total goes to later unlocked weeks; if there are none but
/// earlier unlocked weeks exist, a backward redistribution is left pending.
///
/// # Errors
///
/// Returns an error if a confirmation is pending, or if the date is not in
/// the split or belongs to a different week or day.
pub fn edit_day(
    state: &SplitState,
    date: Date,
    day_in_week: DayInWeek,
    week_number: WeekNumber,
    quantity: u64,
    config: &EngineConfig,
) -> Result<TransitionResult, CoreError> {
    ensure_idle(state)?;

    let idx: usize = locate_entry(&state.entries, date, week_number, day_in_week)?;
    let old_day_quantity: u64 = state.entries[idx].quantity;
    let old_week_total: u64 = state.week_total(week_number);
    let new_week_total: u64 = old_week_total
        .saturating_sub(old_day_quantity)
        .saturating_add(quantity);

    let mut entries: Vec<SplitEntry> = state.entries.clone();
    entries[idx].quantity = quantity;

    let mut locks: LockMap = state.locks.clone();
    locks.lock(week_number);

    let allocated: u64 = state
        .grand_total()
        .saturating_sub(old_week_total)
        .saturating_add(new_week_total);
    let difference: i64 = signed_difference(state.total_quantity, allocated);

    debug!(
        %date,
        %week_number,
        old_day_quantity,
        quantity,
        difference,
        "Applied day edit"
    );

    Ok(balance_job(
        state.total_quantity,
        entries,
        locks,
        PendingWeekChange {
            week_number,
            new_total: new_week_total,
            old_total: old_week_total,
        },
        difference,
        config,
    ))
}

/// Sets a week's total, spreads it over the week, locks the week and
/// rebalances the job total.
///
/// The within-week distribution always happens, independent of whether the
/// job total can be rebalanced.
///
/// # Errors
///
/// Returns an error if a confirmation is pending or the week has no entries.
pub fn edit_week_total(
    state: &SplitState,
    week_number: WeekNumber,
    total: u64,
    config: &EngineConfig,
) -> Result<TransitionResult, CoreError> {
    ensure_idle(state)?;

    let grouped: WeekGroups = state.grouped();
    let week_entries: &[SplitEntry] = grouped
        .get(&week_number)
        .ok_or(DomainError::WeekNotFound(week_number))?;

    let old_week_total: u64 = week_total(week_entries);

    let mut locks: LockMap = state.locks.clone();
    locks.lock(week_number);

    let entries: Vec<SplitEntry> = replace_days(
        &state.entries,
        &distribute_within_week(week_entries, total),
    );

    let allocated: u64 = state
        .grand_total()
        .saturating_sub(old_week_total)
        .saturating_add(total);
    let job_difference: i64 = signed_difference(state.total_quantity, allocated);

    debug!(
        %week_number,
        old_week_total,
        total,
        job_difference,
        "Applied week total edit"
    );

    Ok(balance_job(
        state.total_quantity,
        entries,
        locks,
        PendingWeekChange {
            week_number,
            new_total: total,
            old_total: old_week_total,
        },
        job_difference,
        config,
    ))
}

/// Flips a week's lock flag.
///
/// # Errors
///
/// Returns an error if a confirmation is pending or the week has no entries.
pub fn toggle_week_lock(
    state: &SplitState,
    week_number: WeekNumber,
) -> Result<TransitionResult, CoreError> {
    ensure_idle(state)?;

    if !state.entries.iter().any(|e| e.week_number == week_number) {
        return Err(CoreError::DomainViolation(DomainError::WeekNotFound(
            week_number,
        )));
    }

    let locks: LockMap = toggle_lock(&state.locks, week_number);
    let locked: bool = locks.is_locked(week_number);

    let mut new_state: SplitState = state.clone();
    new_state.locks = locks;

    Ok(TransitionResult {
        new_state,
        outcome: EditOutcome::LockToggled {
            week_number,
            locked,
        },
    })
}

/// Pushes the pending change's opposite delta into earlier unlocked weeks.
///
/// # Errors
///
/// Returns `CoreError::NoPendingChange` when nothing awaits confirmation.
pub fn confirm_backward(
    state: &SplitState,
    config: &EngineConfig,
) -> Result<TransitionResult, CoreError> {
    let ConfirmationState::Pending(pending) = state.confirmation else {
        return Err(CoreError::NoPendingChange);
    };

    let targets: Vec<WeekNumber> =
        backward_targets(&state.entries, &state.locks, pending.week_number);
    let job_delta: i64 = pending.backward_delta();

    let mut new_state: SplitState = state.clone();
    new_state.confirmation = ConfirmationState::Idle;

    if targets.is_empty() {
        let difference: i64 = new_state.difference();
        return Ok(TransitionResult {
            new_state,
            outcome: EditOutcome::Unresolved { difference },
        });
    }

    new_state.entries = redistribute_with(
        &state.entries,
        &targets,
        job_delta,
        &state.grouped(),
        config.rounding,
    );

    debug!(
        week_number = %pending.week_number,
        job_delta,
        targets = ?targets,
        "Confirmed backward redistribution"
    );

    let remaining: i64 = new_state.difference();
    Ok(TransitionResult {
        new_state,
        outcome: EditOutcome::Redistributed {
            weeks: targets,
            delta: job_delta,
            remaining,
        },
    })
}

/// Discards the pending change without touching any quantity.
///
/// # Errors
///
/// Returns `CoreError::NoPendingChange` when nothing awaits confirmation.
pub fn cancel_backward(state: &SplitState) -> Result<TransitionResult, CoreError> {
    let ConfirmationState::Pending(pending) = state.confirmation else {
        return Err(CoreError::NoPendingChange);
    };

    let mut new_state: SplitState = state.clone();
    new_state.confirmation = ConfirmationState::Idle;

    debug!(week_number = %pending.week_number, "Cancelled backward redistribution");

    Ok(TransitionResult {
        new_state,
        outcome: EditOutcome::Cancelled(pending),
    })
}

/// Rejects commands that would bypass a pending confirmation.
const fn ensure_idle(state: &SplitState) -> Result<(), CoreError> {
    match &state.confirmation {
        ConfirmationState::Idle => Ok(()),
        ConfirmationState::Pending(pending) => Err(CoreError::ConfirmationPending {
            week_number: pending.week_number,
        }),
    }
}

/// Resolves `difference` against the weeks around the edited one.
///
/// Later unlocked weeks absorb it immediately. Failing that, earlier
/// unlocked weeks are offered through a pending confirmation. Otherwise the
/// difference stays visible on the state.
fn balance_job(
    total_quantity: u64,
    entries: Vec<SplitEntry>,
    locks: LockMap,
    change: PendingWeekChange,
    difference: i64,
    config: &EngineConfig,
) -> TransitionResult {
    let mut new_state: SplitState = SplitState::new(total_quantity, entries, locks);

    if difference == 0 {
        return TransitionResult {
            new_state,
            outcome: EditOutcome::Balanced,
        };
    }

    let forward: Vec<WeekNumber> =
        forward_targets(&new_state.entries, &new_state.locks, change.week_number);
    if !forward.is_empty() {
        let grouped: WeekGroups = group_by_week(&new_state.entries);
        new_state.entries = redistribute_with(
            &new_state.entries,
            &forward,
            difference,
            &grouped,
            config.rounding,
        );
        let remaining: i64 = new_state.difference();
        debug!(targets = ?forward, difference, remaining, "Redistributed forward");
        return TransitionResult {
            new_state,
            outcome: EditOutcome::Redistributed {
                weeks: forward,
                delta: difference,
                remaining,
            },
        };
    }

    let backward: Vec<WeekNumber> =
        backward_targets(&new_state.entries, &new_state.locks, change.week_number);
    if !backward.is_empty() {
        debug!(
            week_number = %change.week_number,
            candidates = ?backward,
            "Later weeks exhausted; backward redistribution needs confirmation"
        );
        new_state.confirmation = ConfirmationState::Pending(change);
        return TransitionResult {
            new_state,
            outcome: EditOutcome::ConfirmationRequired(change),
        };
    }

    debug!(difference, "No unlocked week can absorb the difference");
    TransitionResult {
        new_state,
        outcome: EditOutcome::Unresolved { difference },
    }
}

/// Overwrites the quantities of `updated` days in `entries`, matched by date.
fn replace_days(entries: &[SplitEntry], updated: &[SplitEntry]) -> Vec<SplitEntry> {
    let quantities: HashMap<Date, u64> = updated.iter().map(|e| (e.date, e.quantity)).collect();
    entries
        .iter()
        .map(|entry| {
            quantities
                .get(&entry.date)
                .map_or_else(|| entry.clone(), |&quantity| entry.with_quantity(quantity))
        })
        .collect()
}
