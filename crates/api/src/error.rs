// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use split_engine::CoreError;
use split_engine_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The request is not allowed in the editor's current state.
    #[error("Invalid editor state: {message}")]
    InvalidState {
        /// A human-readable description of the conflict.
        message: String,
    },
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidDayInWeek(_) => ApiError::InvalidInput {
            field: String::from("day_in_week"),
            message,
        },
        DomainError::InvalidWeekNumber(_) => ApiError::InvalidInput {
            field: String::from("week_number"),
            message,
        },
        DomainError::DateParseError { .. } => ApiError::InvalidInput {
            field: String::from("date"),
            message,
        },
        DomainError::DuplicateDate(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_dates"),
            message,
        },
        DomainError::DayInWeekMismatch { .. } => ApiError::DomainRuleViolation {
            rule: String::from("day_matches_date"),
            message,
        },
        DomainError::WeekNumberOutOfOrder { .. } => ApiError::DomainRuleViolation {
            rule: String::from("consistent_weeks"),
            message,
        },
        DomainError::EntryMismatch { .. } => ApiError::DomainRuleViolation {
            rule: String::from("entry_identity"),
            message,
        },
        DomainError::EntryNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Split entry"),
            message,
        },
        DomainError::WeekNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Week"),
            message,
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::ConfirmationPending { .. } | CoreError::NoPendingChange => {
            ApiError::InvalidState {
                message: err.to_string(),
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}
