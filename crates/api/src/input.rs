// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Best-effort parsing of editor input fields.

use crate::error::{ApiError, ApiResult};
use split_engine_domain::{DayInWeek, WeekNumber, parse_date};
use time::Date;

/// Parses a typed quantity.
///
/// Anything that is not an integer counts as zero, and negative values are
/// clamped to zero.
#[must_use]
pub fn parse_quantity(raw: &str) -> u64 {
    raw.trim()
        .parse::<i128>()
        .map_or(0, |value| u64::try_from(value.max(0)).unwrap_or(u64::MAX))
}

/// Parses a `YYYY-MM-DD` date field.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for the `date` field if parsing fails.
pub fn parse_request_date(raw: &str) -> ApiResult<Date> {
    parse_date(raw).map_err(ApiError::from)
}

/// Validates a week number field.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for week zero.
pub fn parse_week_number(raw: u32) -> ApiResult<WeekNumber> {
    if raw == 0 {
        return Err(ApiError::InvalidInput {
            field: String::from("week_number"),
            message: String::from("Week numbers start at 1"),
        });
    }
    Ok(WeekNumber::new(raw))
}

/// Validates a day-in-week field.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` unless `raw` is in `1..=7`.
pub fn parse_day_in_week(raw: u8) -> ApiResult<DayInWeek> {
    DayInWeek::new(raw).map_err(ApiError::from)
}
