// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command execution against a JSON state file.
//!
//! Every editing command reads the state, applies exactly one API call,
//! prints the response to stdout and writes the new state back.

use crate::cli::{Args, Command};
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use serde::Serialize;
use split_engine::{EngineConfig, SplitState};
use split_engine_api::{
    ApiResponse, ApiResult, EditDayRequest, EditWeekTotalRequest, ToggleLockRequest, build_view,
    cancel_backward, confirm_backward, edit_day, edit_week_total, load_state, parse_request_date,
    parse_week_number, toggle_lock,
};
use split_engine_domain::{LockMap, SplitEntry, validate_entries};
use std::fs;
use std::path::Path;
use time::Date;
use tracing::{debug, info};

/// Runs the parsed command line.
///
/// # Errors
///
/// Returns an error if a file cannot be read or written, or if the editor
/// rejects the command.
pub fn run(args: &Args) -> Result<()> {
    if let Command::Init {
        total,
        entries,
        locked,
    } = &args.command
    {
        return init(args, *total, entries, locked);
    }

    let state: SplitState = read_state(&args.state)?;
    match apply_command(&state, &args.command, &args.engine_config())? {
        None => print_json(&build_view(&state)),
        Some(response) => {
            print_json(&response.response)?;
            save(args, &response.new_state)
        }
    }
}

fn init(args: &Args, total: u64, entries_path: &Path, locked: &[u32]) -> Result<()> {
    let text: String = fs::read_to_string(entries_path)
        .wrap_err_with(|| format!("Failed to read entries from {}", entries_path.display()))?;
    let entries: Vec<SplitEntry> = serde_json::from_str(&text)
        .wrap_err_with(|| format!("Failed to parse entries in {}", entries_path.display()))?;
    let locks: LockMap = locked
        .iter()
        .map(|&week| parse_week_number(week).map(|week_number| (week_number, true)))
        .collect::<ApiResult<LockMap>>()?;

    let state: SplitState = load_state(total, entries, locks).wrap_err("Invalid split entries")?;
    print_json(&build_view(&state))?;
    save(args, &state)
}

/// Applies an editing command. Read-only commands yield `None`.
fn apply_command(
    state: &SplitState,
    command: &Command,
    config: &EngineConfig,
) -> Result<Option<ApiResponse>> {
    let response: ApiResponse = match command {
        Command::Show | Command::Init { .. } => return Ok(None),
        Command::EditDay { date, quantity } => {
            edit_day(state, &day_request(state, date, quantity)?, config)
        }
        Command::EditWeek { week, total } => edit_week_total(
            state,
            &EditWeekTotalRequest {
                week_number: *week,
                total: total.clone(),
            },
            config,
        ),
        Command::ToggleLock { week } => {
            toggle_lock(state, ToggleLockRequest { week_number: *week }, config)
        }
        Command::Confirm => confirm_backward(state, config),
        Command::Cancel => cancel_backward(state, config),
    }
    .wrap_err("The split editor rejected the command")?;
    Ok(Some(response))
}

/// Builds an edit-day request using the week and day recorded for `date`.
fn day_request(state: &SplitState, date: &str, quantity: &str) -> Result<EditDayRequest> {
    let parsed: Date = parse_request_date(date)?;
    let entry: &SplitEntry = state
        .entries
        .iter()
        .find(|e| e.date == parsed)
        .ok_or_else(|| eyre!("No split entry exists for {parsed}"))?;

    Ok(EditDayRequest {
        date: parsed.to_string(),
        day_in_week: entry.day_in_week.value(),
        week_number: entry.week_number.value(),
        quantity: quantity.to_owned(),
    })
}

fn read_state(path: &Path) -> Result<SplitState> {
    let text: String = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read state from {}", path.display()))?;
    let state: SplitState = serde_json::from_str(&text)
        .wrap_err_with(|| format!("Failed to parse state in {}", path.display()))?;
    validate_entries(&state.entries)
        .wrap_err_with(|| format!("State in {} is inconsistent", path.display()))?;
    debug!(path = %path.display(), entries = state.entries.len(), "Read state");
    Ok(state)
}

fn save(args: &Args, state: &SplitState) -> Result<()> {
    if args.dry_run {
        info!(path = %args.state.display(), "Dry run, state file left unchanged");
        return Ok(());
    }

    let text: String = serde_json::to_string_pretty(state).wrap_err("Failed to serialize state")?;
    fs::write(&args.state, text)
        .wrap_err_with(|| format!("Failed to write state to {}", args.state.display()))?;
    debug!(path = %args.state.display(), "Wrote state");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text: String = serde_json::to_string_pretty(value).wrap_err("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}
