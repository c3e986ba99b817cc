// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod input;
mod request_response;
mod view;

#[cfg(test)]
mod tests;

pub use error::{ApiError, ApiResult, translate_core_error, translate_domain_error};
pub use handlers::{
    cancel_backward, confirm_backward, describe_outcome, edit_day, edit_week_total, load_state,
    toggle_lock,
};
pub use input::{parse_day_in_week, parse_quantity, parse_request_date, parse_week_number};
pub use request_response::{
    ApiResponse, BalanceStatus, DayView, EditDayRequest, EditResponse, EditWeekTotalRequest,
    SplitEditorView, ToggleLockRequest, WeekView,
};
pub use view::build_view;
