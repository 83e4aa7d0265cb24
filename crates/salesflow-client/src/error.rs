//! # API Error Type
//!
//! What the UI receives when a sale action fails.
//!
//! ## Error Kinds
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Local validation failure        Remote rejection                       │
//! │  ────────────────────────        ────────────────                       │
//! │  action not in table             backend non-2xx                        │
//! │  → VALIDATION_ERROR              → REJECTED                             │
//! │  → generic message               → server message, verbatim            │
//! │  → no network call               → no retry, no per-status handling    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! ```json
//! {
//!   "code": "REJECTED",
//!   "message": "Sale S-1 was already cancelled"
//! }
//! ```

use salesflow_core::{CoreError, TransitionError, ValidationError};
use serde::Serialize;

use crate::config::ConfigError;
use crate::gateway::GatewayError;

/// Message shown when the workflow table does not offer the requested change.
pub const INVALID_TRANSITION_MESSAGE: &str = "This status change is not available for the sale";

/// Error returned to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Rejected locally, nothing was sent.
    ValidationError,
    /// Backend answered non-2xx.
    Rejected,
    NotFound,
    TransportError,
    ConfigError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Generic local rejection of a status change.
    pub fn invalid_transition() -> Self {
        ApiError::validation(INVALID_TRANSITION_MESSAGE)
    }

    pub fn is_local(&self) -> bool {
        matches!(self.code, ErrorCode::ValidationError | ErrorCode::ConfigError)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Rejected { message, .. } => ApiError::new(ErrorCode::Rejected, message),
            GatewayError::NotFound(id) => {
                ApiError::new(ErrorCode::NotFound, format!("Sale not found: {}", id))
            }
            GatewayError::Transport(msg) => ApiError::new(ErrorCode::TransportError, msg),
        }
    }
}

impl From<TransitionError> for ApiError {
    fn from(_: TransitionError) -> Self {
        ApiError::invalid_transition()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Transition(e) => e.into(),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesflow_core::{SaleStatus, StatusAction};

    #[test]
    fn test_serializes_code_and_message() {
        let err = ApiError::new(ErrorCode::Rejected, "Sale S-9 is locked");
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"code":"REJECTED","message":"Sale S-9 is locked"}"#);
    }

    #[test]
    fn test_rejection_message_passes_through() {
        let api: ApiError =
            GatewayError::rejected(409, "Concurrent update: sale is already paid").into();
        assert_eq!(api.code, ErrorCode::Rejected);
        assert_eq!(api.message, "Concurrent update: sale is already paid");
        assert!(!api.is_local());
    }

    #[test]
    fn test_transition_errors_are_generic() {
        let api: ApiError = TransitionError::NotAllowed {
            from: SaleStatus::Pending,
            requested: StatusAction::Advance(SaleStatus::Paid),
        }
        .into();
        assert_eq!(api, ApiError::invalid_transition());
        assert!(api.is_local());

        let api: ApiError = CoreError::from(TransitionError::Terminal {
            from: SaleStatus::Completed,
        })
        .into();
        assert_eq!(api.message, INVALID_TRANSITION_MESSAGE);
    }
}
