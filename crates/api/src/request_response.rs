// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Quantities arrive as raw text from the editor's input fields.

use serde::{Deserialize, Serialize};
use split_engine::{EditOutcome, PendingWeekChange, SplitState};

/// API request to set one day's quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditDayRequest {
    /// The edited date (`YYYY-MM-DD`).
    pub date: String,
    /// The day-in-week of the date (1 = Monday).
    pub day_in_week: u8,
    /// The week the date belongs to.
    pub week_number: u32,
    /// The quantity as typed.
    pub quantity: String,
}

/// API request to set a week's total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditWeekTotalRequest {
    /// The edited week.
    pub week_number: u32,
    /// The week total as typed.
    pub total: String,
}

/// API request to flip a week's lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleLockRequest {
    /// The week to toggle.
    pub week_number: u32,
}

/// Whether the split adds up to the job total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// The split matches the job total.
    Balanced,
    /// Less than the job total is allocated.
    Under,
    /// More than the job total is allocated.
    Over,
}

impl BalanceStatus {
    /// Classifies a `total_quantity - grand_total` difference.
    #[must_use]
    pub const fn from_difference(difference: i64) -> Self {
        if difference > 0 {
            Self::Under
        } else if difference < 0 {
            Self::Over
        } else {
            Self::Balanced
        }
    }
}

/// One day as shown in the split editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayView {
    /// The date (`YYYY-MM-DD`).
    pub date: String,
    /// The day-in-week (1 = Monday).
    pub day_in_week: u8,
    /// The day's quantity.
    pub quantity: u64,
}

/// One week as shown in the split editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekView {
    /// The week number.
    pub week_number: u32,
    /// Whether the week is locked.
    pub locked: bool,
    /// Sum of the week's days.
    pub total: u64,
    /// The week's days, Monday first.
    pub days: Vec<DayView>,
}

/// The full split editor view, including the discrepancy indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitEditorView {
    /// The authoritative job total.
    pub total_quantity: u64,
    /// Sum of all day quantities.
    pub grand_total: u64,
    /// `total_quantity - grand_total`.
    pub difference: i64,
    /// Classification of `difference`.
    pub balance: BalanceStatus,
    /// Weeks in ascending order.
    pub weeks: Vec<WeekView>,
    /// The backward redistribution awaiting confirmation, if any.
    pub pending: Option<PendingWeekChange>,
}

/// API response for any accepted editor command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResponse {
    /// The editor view after the command.
    pub view: SplitEditorView,
    /// How the command resolved the job total.
    pub outcome: EditOutcome,
    /// A success message.
    pub message: String,
}

/// The new editor state paired with the response for the caller to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// The state to keep for the next request.
    pub new_state: SplitState,
    /// The response to return to the editor.
    pub response: EditResponse,
}
