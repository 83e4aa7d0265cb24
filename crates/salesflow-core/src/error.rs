//! # Error Types
//!
//! Domain-specific error types for salesflow-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  salesflow-core errors (this file)                                     │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── TransitionError  - Status change not offered by the workflow      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  salesflow-client errors (separate crate)                              │
//! │  ├── GatewayError     - Backend rejected or unreachable                │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: TransitionError → CoreError → ApiError → UI                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::status::SaleStatus;
use crate::workflow::StatusAction;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested status change is not offered from the current status.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Transition Error
// =============================================================================

/// A status change that the workflow table does not offer.
///
/// ## When This Occurs
/// ```text
/// Sale is `pending`, user somehow requests `paid`
///      │
///      ▼
/// allowed_actions(pending) = [confirmed, cancelled, fast_track]
///      │
///      ▼
/// NotAllowed { from: pending, requested: paid }
///      │
///      ▼
/// Control is disabled; no request leaves the client
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The sale is `completed` or `cancelled`.
    #[error("Sale is {from} and cannot change status")]
    Terminal { from: SaleStatus },

    /// The action is not in the table row for the current status.
    #[error("Cannot move sale from {from} to {requested}")]
    NotAllowed {
        from: SaleStatus,
        requested: StatusAction,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Amount does not fit in the money representation.
    #[error("{field} is out of range")]
    OutOfRange { field: String },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A wire token that is not a member of the enumeration.
    #[error("Unknown {kind}: '{value}'")]
    UnknownToken { kind: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_error_messages() {
        let err = TransitionError::NotAllowed {
            from: SaleStatus::Pending,
            requested: StatusAction::Advance(SaleStatus::Paid),
        };
        assert_eq!(err.to_string(), "Cannot move sale from pending to paid");

        let err = TransitionError::Terminal {
            from: SaleStatus::Cancelled,
        };
        assert_eq!(err.to_string(), "Sale is cancelled and cannot change status");
    }

    #[test]
    fn test_unknown_token_message() {
        let err = ValidationError::UnknownToken {
            kind: "sale status",
            value: "fast_track".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown sale status: 'fast_track'");
    }

    #[test]
    fn test_errors_convert_to_core_error() {
        let core_err: CoreError = TransitionError::Terminal {
            from: SaleStatus::Completed,
        }
        .into();
        assert!(matches!(core_err, CoreError::Transition(_)));

        let core_err: CoreError = ValidationError::Required {
            field: "reference".to_string(),
        }
        .into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
