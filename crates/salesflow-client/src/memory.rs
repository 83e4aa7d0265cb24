//! # In-Memory Sales Backend
//!
//! A [`SalesGateway`] that keeps sales in a map and acts as the system of
//! record: it re-validates every status update against the stored status,
//! applies payment events, and handles deletion. Used by the CLI and tests
//! in place of the HTTP backend.
//!
//! Writes are last-write-wins. A request that was valid when the client
//! checked it can still be rejected here if another writer moved the sale
//! first; the rejection message is what the user gets to see.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use salesflow_core::{workflow, Money, PaymentStatus, Sale, SaleTotals, StatusUpdateRequest};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::gateway::{GatewayError, GatewayResult, SalesGateway};

/// HTTP-style status codes the backend answers with.
const CONFLICT: u16 = 409;
const UNPROCESSABLE: u16 = 422;

#[derive(Debug, Default)]
pub struct InMemorySalesBackend {
    sales: RwLock<HashMap<String, Sale>>,
    update_requests: AtomicUsize,
}

impl InMemorySalesBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `pending` sale, as the sale-creation action does.
    pub async fn create_sale(
        &self,
        reference: &str,
        client_id: &str,
        zone_id: &str,
        totals: SaleTotals,
    ) -> GatewayResult<Sale> {
        let sale = Sale::new_pending(reference, client_id, zone_id, totals)
            .map_err(|e| GatewayError::rejected(UNPROCESSABLE, e.to_string()))?;

        info!(id = %sale.id, reference = %sale.reference, total = %sale.total(), "Sale created");

        self.sales.write().await.insert(sale.id.clone(), sale.clone());
        Ok(sale)
    }

    /// Stores a sale as-is. Lets callers start from any status.
    pub async fn insert(&self, sale: Sale) {
        debug!(id = %sale.id, status = %sale.status, "Inserting sale");
        self.sales.write().await.insert(sale.id.clone(), sale);
    }

    /// Backend-side payment event. Advances `payment_status` only; the
    /// user-driven `status` is left alone.
    pub async fn record_payment(&self, id: &str, amount: Money) -> GatewayResult<Sale> {
        if !amount.is_positive() {
            return Err(GatewayError::rejected(
                UNPROCESSABLE,
                "Payment amount must be positive",
            ));
        }

        let mut sales = self.sales.write().await;
        let sale = sales
            .get_mut(id)
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))?;

        let paid = sale.paid().checked_add(amount).ok_or_else(|| {
            GatewayError::rejected(UNPROCESSABLE, "Payment amount is out of range")
        })?;

        sale.paid_cents = paid.cents();
        sale.payment_status = PaymentStatus::from_amounts(sale.total(), sale.paid());
        sale.updated_at = Utc::now();

        info!(
            id = %id,
            amount = %amount,
            paid = %sale.paid(),
            payment_status = %sale.payment_status,
            "Payment recorded"
        );

        Ok(sale.clone())
    }

    /// Removes a sale. Unrelated to the status workflow.
    pub async fn delete_sale(&self, id: &str) -> GatewayResult<()> {
        if self.sales.write().await.remove(id).is_none() {
            return Err(GatewayError::NotFound(id.to_string()));
        }

        info!(id = %id, "Sale deleted");
        Ok(())
    }

    /// Number of `update_status` calls received, accepted or not.
    pub fn request_count(&self) -> usize {
        self.update_requests.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.sales.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sales.read().await.is_empty()
    }
}

#[async_trait]
impl SalesGateway for InMemorySalesBackend {
    async fn fetch_sale(&self, id: &str) -> GatewayResult<Sale> {
        self.sales
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))
    }

    async fn update_status(&self, id: &str, request: StatusUpdateRequest) -> GatewayResult<Sale> {
        self.update_requests.fetch_add(1, Ordering::SeqCst);

        // Round-trip the body the way it would cross the wire
        let body = serde_json::to_vec(&request)?;
        let request: StatusUpdateRequest = serde_json::from_slice(&body)?;

        let mut sales = self.sales.write().await;
        let sale = sales
            .get_mut(id)
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))?;

        let current = sale.status;

        if current.is_terminal() {
            warn!(
                id = %id,
                current = %current,
                requested = %request.status,
                "Update on closed sale rejected"
            );
            return Err(GatewayError::rejected(
                CONFLICT,
                format!("Sale {} is already {}", sale.reference, current),
            ));
        }

        if !workflow::can_reach(current, request.status) {
            warn!(
                id = %id,
                current = %current,
                requested = %request.status,
                "Invalid status update rejected"
            );
            return Err(GatewayError::rejected(
                CONFLICT,
                format!(
                    "Sale {} cannot move from {} to {}",
                    sale.reference, current, request.status
                ),
            ));
        }

        sale.status = request.status;
        sale.updated_at = Utc::now();

        info!(id = %id, from = %current, to = %sale.status, "Sale status updated");

        Ok(sale.clone())
    }
}
