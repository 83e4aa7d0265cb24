//! # Sales Gateway
//!
//! The seam between the client and whatever owns the sale record. An HTTP
//! implementation would issue `GET`/`PATCH` against the sales resource; the
//! in-memory backend in [`crate::memory`] implements the same trait.

use std::sync::Arc;

use async_trait::async_trait;
use salesflow_core::{Sale, StatusUpdateRequest};
use thiserror::Error;

/// Result type alias for gateway calls.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failures reported by the backend side.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Backend answered with a non-2xx status. `message` is the server's
    /// text and must reach the user unchanged.
    #[error("{message}")]
    Rejected { status_code: u16, message: String },

    #[error("Sale not found: {0}")]
    NotFound(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl GatewayError {
    pub fn rejected(status_code: u16, message: impl Into<String>) -> Self {
        GatewayError::Rejected {
            status_code,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::rejected(400, format!("Malformed request body: {}", err))
    }
}

/// Backend operations the sale workflow needs.
#[async_trait]
pub trait SalesGateway: Send + Sync {
    /// Fetches the current record.
    async fn fetch_sale(&self, id: &str) -> GatewayResult<Sale>;

    /// Sends the "update sale" call and returns the record the backend
    /// persisted.
    async fn update_status(&self, id: &str, request: StatusUpdateRequest) -> GatewayResult<Sale>;
}

#[async_trait]
impl<G: SalesGateway + ?Sized> SalesGateway for Arc<G> {
    async fn fetch_sale(&self, id: &str) -> GatewayResult<Sale> {
        (**self).fetch_sale(id).await
    }

    async fn update_status(&self, id: &str, request: StatusUpdateRequest) -> GatewayResult<Sale> {
        (**self).update_status(id, request).await
    }
}
