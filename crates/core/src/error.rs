// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use split_engine_domain::{DomainError, WeekNumber};

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A backward redistribution is awaiting confirmation or cancellation.
    ConfirmationPending {
        /// The week whose edit raised the pending change.
        week_number: WeekNumber,
    },
    /// Confirm or cancel was requested with nothing pending.
    NoPendingChange,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::ConfirmationPending { week_number } => write!(
                f,
                "A backward redistribution for week {week_number} must be confirmed or cancelled first"
            ),
            Self::NoPendingChange => write!(f, "No backward redistribution is pending"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
