// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers for the split editor.
//!
//! Each handler validates its request, applies exactly one command and
//! returns the new state together with the editor view.

use crate::error::{ApiError, ApiResult};
use crate::input::{parse_day_in_week, parse_quantity, parse_request_date, parse_week_number};
use crate::request_response::{
    ApiResponse, EditDayRequest, EditResponse, EditWeekTotalRequest, ToggleLockRequest,
};
use crate::view::build_view;
use split_engine::{Command, EditOutcome, EngineConfig, SplitState, TransitionResult, apply};
use split_engine_domain::{LockMap, SplitEntry, WeekNumber, validate_entries};
use tracing::{info, warn};

/// Builds an editor state from a generated split.
///
/// # Errors
///
/// Returns an error if the entries fail validation.
pub fn load_state(
    total_quantity: u64,
    entries: Vec<SplitEntry>,
    locks: LockMap,
) -> ApiResult<SplitState> {
    validate_entries(&entries)?;
    info!(
        total_quantity,
        entries = entries.len(),
        "Loaded split for editing"
    );
    Ok(SplitState::new(total_quantity, entries, locks))
}

/// Sets one day's quantity.
///
/// # Errors
///
/// Returns an error if the request fields are invalid, the date is not in the
/// split, or a backward redistribution is pending.
pub fn edit_day(
    state: &SplitState,
    request: &EditDayRequest,
    config: &EngineConfig,
) -> ApiResult<ApiResponse> {
    let command: Command = Command::EditDay {
        date: parse_request_date(&request.date)?,
        day_in_week: parse_day_in_week(request.day_in_week)?,
        week_number: parse_week_number(request.week_number)?,
        quantity: parse_quantity(&request.quantity),
    };
    run(state, command, config)
}

/// Sets a week's total.
///
/// # Errors
///
/// Returns an error if the week is unknown or a backward redistribution is
/// pending.
pub fn edit_week_total(
    state: &SplitState,
    request: &EditWeekTotalRequest,
    config: &EngineConfig,
) -> ApiResult<ApiResponse> {
    let command: Command = Command::EditWeekTotal {
        week_number: parse_week_number(request.week_number)?,
        total: parse_quantity(&request.total),
    };
    run(state, command, config)
}

/// Flips a week's lock.
///
/// # Errors
///
/// Returns an error if the week is unknown or a backward redistribution is
/// pending.
pub fn toggle_lock(
    state: &SplitState,
    request: ToggleLockRequest,
    config: &EngineConfig,
) -> ApiResult<ApiResponse> {
    let command: Command = Command::ToggleLock {
        week_number: parse_week_number(request.week_number)?,
    };
    run(state, command, config)
}

/// Confirms the pending backward redistribution.
///
/// # Errors
///
/// Returns `ApiError::InvalidState` when nothing is pending.
pub fn confirm_backward(state: &SplitState, config: &EngineConfig) -> ApiResult<ApiResponse> {
    run(state, Command::ConfirmBackward, config)
}

/// Cancels the pending backward redistribution.
///
/// # Errors
///
/// Returns `ApiError::InvalidState` when nothing is pending.
pub fn cancel_backward(state: &SplitState, config: &EngineConfig) -> ApiResult<ApiResponse> {
    run(state, Command::CancelBackward, config)
}

fn run(state: &SplitState, command: Command, config: &EngineConfig) -> ApiResult<ApiResponse> {
    let result: TransitionResult = apply(state, command, config).map_err(|err| {
        let api_err: ApiError = ApiError::from(err);
        warn!(error = %api_err, "Rejected split editor command");
        api_err
    })?;

    let message: String = describe_outcome(&result.outcome);
    match &result.outcome {
        EditOutcome::Unresolved { difference } => {
            warn!(difference, "Split does not match the job total");
        }
        EditOutcome::Redistributed { remaining, .. } if *remaining != 0 => {
            warn!(remaining, "Redistribution could not absorb the full difference");
        }
        _ => info!(%message, "Applied split editor command"),
    }

    Ok(ApiResponse {
        response: EditResponse {
            view: build_view(&result.new_state),
            outcome: result.outcome,
            message,
        },
        new_state: result.new_state,
    })
}

/// A one-line description of an outcome for the editor's status line.
#[must_use]
pub fn describe_outcome(outcome: &EditOutcome) -> String {
    match outcome {
        EditOutcome::Balanced => String::from("Split matches the job total"),
        EditOutcome::Redistributed {
            weeks,
            delta,
            remaining,
        } => {
            let weeks: String = join_weeks(weeks);
            if *remaining == 0 {
                format!("Redistributed {delta} across weeks {weeks}")
            } else {
                format!(
                    "Redistributed {delta} across weeks {weeks}; {remaining} could not be absorbed"
                )
            }
        }
        EditOutcome::ConfirmationRequired(pending) => format!(
            "All later weeks are locked. Confirm to redistribute {} across weeks before week {}",
            pending.backward_delta(),
            pending.week_number
        ),
        EditOutcome::Unresolved { difference } => {
            format!("No unlocked week can absorb a difference of {difference}")
        }
        EditOutcome::LockToggled {
            week_number,
            locked,
        } => {
            if *locked {
                format!("Week {week_number} locked")
            } else {
                format!("Week {week_number} unlocked")
            }
        }
        EditOutcome::Cancelled(pending) => format!(
            "Backward redistribution for week {} cancelled",
            pending.week_number
        ),
    }
}

fn join_weeks(weeks: &[WeekNumber]) -> String {
    weeks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<String>>()
        .join(", ")
}
