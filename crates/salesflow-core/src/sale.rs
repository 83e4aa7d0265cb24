//! # Sale Record
//!
//! The front end's transient copy of a sale. The backend owns the record;
//! this type only mirrors what it last returned.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. CREATE      Sale::new_pending() → status: pending, unpaid          │
//! │  2. TRANSITION  user picks an action → StatusUpdateRequest → backend   │
//! │  3. PAYMENT     backend payment event → payment_status advances        │
//! │  4. TERMINAL    completed / cancelled → no further actions offered     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deletion is a separate backend operation and never goes through the
//! workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::status::{PaymentStatus, SaleStatus};
use crate::validation::{validate_amount_cents, validate_reference, ValidationResult};
use crate::workflow::{self, StatusAction};

// =============================================================================
// Totals
// =============================================================================

/// Monetary components entered when a sale is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub discount: Money,
}

impl SaleTotals {
    pub fn new(subtotal: Money, tax: Money, discount: Money) -> Self {
        SaleTotals {
            subtotal,
            tax,
            discount,
        }
    }

    /// `subtotal + tax - discount`, or `OutOfRange` if it overflows.
    pub fn total(&self) -> ValidationResult<Money> {
        self.subtotal
            .checked_add(self.tax)
            .and_then(|gross| gross.checked_sub(self.discount))
            .ok_or_else(|| ValidationError::OutOfRange {
                field: "total".to_string(),
            })
    }

    /// Rejects negative components, a discount larger than the amount due,
    /// and totals that overflow. Returns the total on success.
    pub fn validate(&self) -> ValidationResult<Money> {
        validate_amount_cents("subtotal", self.subtotal.cents())?;
        validate_amount_cents("tax", self.tax.cents())?;
        validate_amount_cents("discount", self.discount.cents())?;

        let total = self.total()?;
        if total.is_negative() {
            return Err(ValidationError::MustBeNonNegative {
                field: "total".to_string(),
            });
        }

        Ok(total)
    }
}

// =============================================================================
// Sale
// =============================================================================

/// A client order tracked through fulfilment and payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sale {
    pub id: String,
    /// Human-facing reference (e.g. `S-2024/00042`).
    pub reference: String,
    pub client_id: String,
    pub zone_id: String,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub discount_cents: i64,
    pub total_cents: i64,
    /// Sum of payments the backend has recorded.
    pub paid_cents: i64,
    pub status: SaleStatus,
    pub payment_status: PaymentStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Sale {
    /// Builds a new `pending`, `unpaid` sale with a fresh UUID v4.
    ///
    /// ## Example
    /// ```rust
    /// use salesflow_core::{Money, PaymentStatus, Sale, SaleStatus, SaleTotals};
    ///
    /// let totals = SaleTotals::new(
    ///     Money::from_cents(10_000),
    ///     Money::from_cents(2_000),
    ///     Money::zero(),
    /// );
    /// let sale = Sale::new_pending("S-0001", "client-7", "zone-north", totals).unwrap();
    ///
    /// assert_eq!(sale.status, SaleStatus::Pending);
    /// assert_eq!(sale.payment_status, PaymentStatus::Unpaid);
    /// assert_eq!(sale.total_cents, 12_000);
    /// ```
    pub fn new_pending(
        reference: &str,
        client_id: &str,
        zone_id: &str,
        totals: SaleTotals,
    ) -> ValidationResult<Self> {
        validate_reference(reference)?;
        require("client_id", client_id)?;
        require("zone_id", zone_id)?;
        let total = totals.validate()?;

        let now = Utc::now();

        Ok(Sale {
            id: Uuid::new_v4().to_string(),
            reference: reference.trim().to_string(),
            client_id: client_id.to_string(),
            zone_id: zone_id.to_string(),
            subtotal_cents: totals.subtotal.cents(),
            tax_cents: totals.tax.cents(),
            discount_cents: totals.discount.cents(),
            total_cents: total.cents(),
            paid_cents: 0,
            status: SaleStatus::Pending,
            payment_status: PaymentStatus::from_amounts(total, Money::zero()),
            created_at: now,
            updated_at: now,
        })
    }

    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents)
    }

    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    #[inline]
    pub fn discount(&self) -> Money {
        Money::from_cents(self.discount_cents)
    }

    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    #[inline]
    pub fn paid(&self) -> Money {
        Money::from_cents(self.paid_cents)
    }

    /// Outstanding amount, never negative.
    pub fn balance_due(&self) -> Money {
        self.total().remaining_after(self.paid())
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Actions the UI should render for this sale.
    pub fn available_actions(&self) -> &'static [StatusAction] {
        workflow::allowed_actions(self.status)
    }
}

fn require(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Status Update Request
// =============================================================================

/// Body of the "update sale" call: `{ "status": "<status>" }`.
///
/// Only a resolved [`SaleStatus`] can go in here, so the fast-track token
/// can never reach the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusUpdateRequest {
    pub status: SaleStatus,
}

impl StatusUpdateRequest {
    pub fn new(status: SaleStatus) -> Self {
        StatusUpdateRequest { status }
    }
}

impl From<SaleStatus> for StatusUpdateRequest {
    fn from(status: SaleStatus) -> Self {
        StatusUpdateRequest::new(status)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(subtotal: i64, tax: i64, discount: i64) -> SaleTotals {
        SaleTotals::new(
            Money::from_cents(subtotal),
            Money::from_cents(tax),
            Money::from_cents(discount),
        )
    }

    #[test]
    fn test_new_sale_is_pending_and_unpaid() {
        let totals = totals(10_000, 2_100, 500);
        let sale = Sale::new_pending("S-2024/00042", "client-1", "zone-1", totals).unwrap();

        assert_eq!(sale.status, SaleStatus::Pending);
        assert_eq!(sale.payment_status, PaymentStatus::Unpaid);
        assert_eq!(sale.total(), Money::from_cents(11_600));
        assert_eq!(sale.balance_due(), sale.total());
        assert!(uuid::Uuid::parse_str(&sale.id).is_ok());
        assert_eq!(sale.created_at, sale.updated_at);
    }

    #[test]
    fn test_new_sale_rejects_bad_input() {
        assert!(Sale::new_pending("", "client-1", "zone-1", totals(100, 0, 0)).is_err());
        assert!(Sale::new_pending("S-1", " ", "zone-1", totals(100, 0, 0)).is_err());
        assert!(Sale::new_pending("S-1", "client-1", "", totals(100, 0, 0)).is_err());
        assert!(Sale::new_pending("S-1", "client-1", "zone-1", totals(-100, 0, 0)).is_err());
        assert!(Sale::new_pending("S-1", "client-1", "zone-1", totals(100, 0, 200)).is_err());
    }

    #[test]
    fn test_totals_that_overflow_are_out_of_range() {
        let err = totals(i64::MAX, 1, 0).validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange {
                field: "total".to_string()
            }
        );
        assert_eq!(err.to_string(), "total is out of range");

        assert!(Sale::new_pending("S-1", "client-1", "zone-1", totals(i64::MAX, 1, 0)).is_err());

        // A gross amount at the limit is still representable
        assert_eq!(totals(i64::MAX, 0, 1).validate(), Ok(Money::from_cents(i64::MAX - 1)));
    }

    #[test]
    fn test_zero_total_sale_starts_paid() {
        let sale = Sale::new_pending("S-FREE", "client-1", "zone-1", totals(0, 0, 0)).unwrap();
        assert_eq!(sale.payment_status, PaymentStatus::Paid);
        assert_eq!(sale.status, SaleStatus::Pending);
    }

    #[test]
    fn test_available_actions_follow_status() {
        let mut sale = Sale::new_pending("S-1", "client-1", "zone-1", totals(100, 0, 0)).unwrap();
        assert_eq!(sale.available_actions().len(), 3);

        sale.status = SaleStatus::Cancelled;
        assert!(sale.is_terminal());
        assert!(sale.available_actions().is_empty());
    }

    #[test]
    fn test_status_update_request_wire_format() {
        let body = StatusUpdateRequest::from(StatusAction::FastTrack.target());
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"completed"}"#);
    }

    #[test]
    fn test_sale_json_roundtrip_keeps_status_tokens() {
        let sale = Sale::new_pending("S-1", "client-1", "zone-1", totals(100, 0, 0)).unwrap();
        let json = serde_json::to_value(&sale).unwrap();
        assert_eq!(json["status"], "pending");
        assert_eq!(json["payment_status"], "unpaid");

        let back: Sale = serde_json::from_value(json).unwrap();
        assert_eq!(back, sale);
    }
}
