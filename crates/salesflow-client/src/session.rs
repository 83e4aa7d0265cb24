//! # Sale Session
//!
//! Holds the client's optimistic copy of one sale and submits status
//! changes for it.
//!
//! ## Request Lifecycle
//! ```text
//! request(action)
//!      │
//!      ▼
//! validate_transition(local status, action)
//!      │
//!      ├── Err ──► ApiError::invalid_transition()      (no gateway call)
//!      │
//!      ▼
//! gateway.update_status(id, { status: action.target() })
//!      │
//!      ├── Err ──► ApiError with server message        (local copy kept)
//!      │
//!      ▼
//! local copy = sale returned by the backend
//! ```
//!
//! There is no retry and no cancellation. Two sessions on the same sale are
//! not coordinated; the backend decides, last write wins.

use salesflow_core::validation::validate_uuid;
use salesflow_core::{workflow, Sale, SaleStatus, StatusAction, StatusUpdateRequest};
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::gateway::SalesGateway;

pub struct SaleSession<G> {
    gateway: G,
    sale: Sale,
    show_fast_track: bool,
}

impl<G: SalesGateway> SaleSession<G> {
    /// Fetches the sale and starts a session on it.
    pub async fn open(gateway: G, id: &str) -> Result<Self, ApiError> {
        validate_uuid(id)?;

        debug!(id = %id, "Opening sale session");
        let sale = gateway.fetch_sale(id).await?;

        Ok(Self::from_sale(gateway, sale))
    }

    /// Starts a session on a sale the caller already holds.
    pub fn from_sale(gateway: G, sale: Sale) -> Self {
        SaleSession {
            gateway,
            sale,
            show_fast_track: true,
        }
    }

    /// Turns the fast-track shortcut on or off. When off it is neither
    /// offered nor accepted.
    pub fn with_fast_track(mut self, enabled: bool) -> Self {
        self.show_fast_track = enabled;
        self
    }

    /// Applies the UI settings from the client config.
    pub fn with_config(self, config: &ClientConfig) -> Self {
        self.with_fast_track(config.ui.show_fast_track)
    }

    pub fn sale(&self) -> &Sale {
        &self.sale
    }

    pub fn status(&self) -> SaleStatus {
        self.sale.status
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Actions to render as buttons, in table order.
    pub fn available_actions(&self) -> Vec<StatusAction> {
        workflow::allowed_actions(self.sale.status)
            .iter()
            .copied()
            .filter(|action| self.show_fast_track || !action.is_fast_track())
            .collect()
    }

    /// Next statuses to render as chips (never includes fast-track).
    pub fn chip_statuses(&self) -> Vec<SaleStatus> {
        workflow::chip_statuses(self.sale.status)
    }

    /// Local check only. Returns the status that would be sent.
    pub fn check(&self, action: StatusAction) -> Result<SaleStatus, ApiError> {
        if action.is_fast_track() && !self.show_fast_track {
            return Err(ApiError::invalid_transition());
        }

        workflow::validate_transition(self.sale.status, action).map_err(|e| {
            warn!(id = %self.sale.id, error = %e, "Status change rejected locally");
            ApiError::from(e)
        })
    }

    /// Validates `action` locally, then submits the resolved status.
    pub async fn request(&mut self, action: StatusAction) -> Result<&Sale, ApiError> {
        let target = self.check(action)?;

        debug!(
            id = %self.sale.id,
            from = %self.sale.status,
            action = %action,
            target = %target,
            "Submitting status change"
        );

        let updated = self
            .gateway
            .update_status(&self.sale.id, StatusUpdateRequest::new(target))
            .await
            .map_err(|e| {
                warn!(id = %self.sale.id, error = %e, "Status change rejected by backend");
                ApiError::from(e)
            })?;

        info!(
            id = %updated.id,
            from = %self.sale.status,
            to = %updated.status,
            "Sale status changed"
        );
        self.sale = updated;

        Ok(&self.sale)
    }

    /// Same as [`request`](Self::request) for a plain status.
    pub async fn request_status(&mut self, status: SaleStatus) -> Result<&Sale, ApiError> {
        self.request(StatusAction::Advance(status)).await
    }

    /// Replaces the local copy with the backend's current record.
    pub async fn refetch(&mut self) -> Result<&Sale, ApiError> {
        self.sale = self.gateway.fetch_sale(&self.sale.id).await?;
        debug!(id = %self.sale.id, status = %self.sale.status, "Sale refetched");
        Ok(&self.sale)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salesflow_core::{Money, SaleTotals};

    use super::*;
    use crate::error::ErrorCode;
    use crate::memory::InMemorySalesBackend;

    async fn session_at(status: SaleStatus) -> SaleSession<Arc<InMemorySalesBackend>> {
        let backend = Arc::new(InMemorySalesBackend::new());
        let totals = SaleTotals::new(Money::from_cents(10_000), Money::zero(), Money::zero());
        let mut sale = backend.create_sale("S-100", "client-1", "zone-1", totals).await.unwrap();
        sale.status = status;
        backend.insert(sale.clone()).await;
        SaleSession::open(backend, &sale.id).await.unwrap()
    }

    #[tokio::test]
    async fn test_open_rejects_malformed_id() {
        let backend = InMemorySalesBackend::new();
        let err = SaleSession::open(backend, "not-a-uuid").await.err().unwrap();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_open_unknown_sale() {
        let backend = InMemorySalesBackend::new();
        let err = SaleSession::open(backend, "550e8400-e29b-41d4-a716-446655440000")
            .await
            .err()
            .unwrap();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_pending_confirm_then_reject_paid() {
        let mut session = session_at(SaleStatus::Pending).await;

        let err = session.request_status(SaleStatus::Paid).await.unwrap_err();
        assert_eq!(err, ApiError::invalid_transition());
        assert_eq!(session.gateway().request_count(), 0);

        let sale = session.request_status(SaleStatus::Confirmed).await.unwrap();
        assert_eq!(sale.status, SaleStatus::Confirmed);
        assert_eq!(session.gateway().request_count(), 1);
    }

    #[tokio::test]
    async fn test_fast_track_from_paid_sends_completed() {
        let mut session = session_at(SaleStatus::Paid).await;

        let sale = session.request(StatusAction::FastTrack).await.unwrap();
        assert_eq!(sale.status, SaleStatus::Completed);
        assert!(session.available_actions().is_empty());
    }

    #[tokio::test]
    async fn test_fast_track_can_be_disabled() {
        let session = session_at(SaleStatus::Confirmed).await.with_fast_track(false);

        assert_eq!(
            session.available_actions(),
            vec![
                StatusAction::Advance(SaleStatus::PaymentPending),
                StatusAction::Advance(SaleStatus::Cancelled),
            ]
        );
        assert!(session.check(StatusAction::FastTrack).is_err());
    }

    #[tokio::test]
    async fn test_chips_exclude_fast_track() {
        let session = session_at(SaleStatus::Shipped).await;
        assert_eq!(session.available_actions().len(), 3);
        assert_eq!(
            session.chip_statuses(),
            vec![SaleStatus::Delivered, SaleStatus::Cancelled]
        );
    }
}
