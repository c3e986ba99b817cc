// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, translate_core_error, translate_domain_error};
use split_engine::CoreError;
use split_engine_domain::{DomainError, WeekNumber};
use time::macros::date;

#[test]
fn test_api_error_display() {
    let err1: ApiError = ApiError::DomainRuleViolation {
        rule: String::from("test_rule"),
        message: String::from("test message"),
    };
    assert_eq!(
        format!("{err1}"),
        "Domain rule violation (test_rule): test message"
    );

    let err2: ApiError = ApiError::InvalidInput {
        field: String::from("test_field"),
        message: String::from("test error"),
    };
    assert_eq!(
        format!("{err2}"),
        "Invalid input for field 'test_field': test error"
    );
}

#[test]
fn test_domain_errors_keep_their_message() {
    let err: ApiError = translate_domain_error(DomainError::DuplicateDate(date!(2026 - 03 - 04)));

    assert_eq!(
        err,
        ApiError::DomainRuleViolation {
            rule: String::from("unique_dates"),
            message: String::from("Date 2026-03-04 appears more than once"),
        }
    );
}

#[test]
fn test_core_errors_unwrap_domain_violations() {
    let err: ApiError = translate_core_error(CoreError::DomainViolation(
        DomainError::WeekNotFound(WeekNumber::new(7)),
    ));

    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Week"
    ));
    assert_eq!(err.to_string(), "Week not found: Week 7 has no split entries");
}

#[test]
fn test_confirmation_errors_become_invalid_state() {
    let pending: ApiError = ApiError::from(CoreError::ConfirmationPending {
        week_number: WeekNumber::new(2),
    });
    let idle: ApiError = ApiError::from(CoreError::NoPendingChange);

    assert!(matches!(pending, ApiError::InvalidState { .. }));
    assert_eq!(
        idle.to_string(),
        "Invalid editor state: No backward redistribution is pending"
    );
}
