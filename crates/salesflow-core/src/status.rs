//! # Status Types
//!
//! The two independent status enumerations carried by a sale.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SaleStatus (user-driven)              PaymentStatus (backend-derived) │
//! │  ─────────────────────────             ─────────────────────────────── │
//! │  pending                               unpaid                          │
//! │  confirmed                             partially_paid                  │
//! │  payment_pending                       paid                            │
//! │  partially_paid                                                        │
//! │  paid                                                                  │
//! │  shipped                                                               │
//! │  delivered                                                             │
//! │  completed   ◄── terminal                                              │
//! │  cancelled   ◄── terminal                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `fast_track` is NOT a status. It lives in [`crate::workflow::StatusAction`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Sale Status
// =============================================================================

/// The lifecycle status of a sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    /// Created, awaiting confirmation.
    #[default]
    Pending,
    /// Confirmed by the client.
    Confirmed,
    /// Invoiced, waiting for payment.
    PaymentPending,
    /// Some payment received.
    PartiallyPaid,
    /// Fully paid.
    Paid,
    /// Goods left the warehouse.
    Shipped,
    /// Goods received by the client.
    Delivered,
    /// Closed successfully.
    Completed,
    /// Closed without fulfilment.
    Cancelled,
}

impl SaleStatus {
    /// Every status in lifecycle order.
    pub const ALL: [SaleStatus; 9] = [
        SaleStatus::Pending,
        SaleStatus::Confirmed,
        SaleStatus::PaymentPending,
        SaleStatus::PartiallyPaid,
        SaleStatus::Paid,
        SaleStatus::Shipped,
        SaleStatus::Delivered,
        SaleStatus::Completed,
        SaleStatus::Cancelled,
    ];

    /// Returns the wire token (`payment_pending`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "pending",
            SaleStatus::Confirmed => "confirmed",
            SaleStatus::PaymentPending => "payment_pending",
            SaleStatus::PartiallyPaid => "partially_paid",
            SaleStatus::Paid => "paid",
            SaleStatus::Shipped => "shipped",
            SaleStatus::Delivered => "delivered",
            SaleStatus::Completed => "completed",
            SaleStatus::Cancelled => "cancelled",
        }
    }

    /// Human label for chips and buttons.
    pub const fn label(&self) -> &'static str {
        match self {
            SaleStatus::Pending => "Pending",
            SaleStatus::Confirmed => "Confirmed",
            SaleStatus::PaymentPending => "Payment pending",
            SaleStatus::PartiallyPaid => "Partially paid",
            SaleStatus::Paid => "Paid",
            SaleStatus::Shipped => "Shipped",
            SaleStatus::Delivered => "Delivered",
            SaleStatus::Completed => "Completed",
            SaleStatus::Cancelled => "Cancelled",
        }
    }

    /// Returns true for `completed` and `cancelled`.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, SaleStatus::Completed | SaleStatus::Cancelled)
    }
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaleStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SaleStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownToken {
                kind: "sale status",
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Payment Status
// =============================================================================

/// How much of a sale has been paid. Advanced by backend payment events,
/// independently of [`SaleStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    PartiallyPaid,
    Paid,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Unpaid,
        PaymentStatus::PartiallyPaid,
        PaymentStatus::Paid,
    ];

    /// Derives the payment status from the sale total and the amount paid.
    ///
    /// ## Rules
    /// - nothing paid → `unpaid`
    /// - paid covers the total → `paid` (a zero-total sale counts as paid)
    /// - anything in between → `partially_paid`
    ///
    /// ## Example
    /// ```rust
    /// use salesflow_core::{Money, PaymentStatus};
    ///
    /// let total = Money::from_cents(10_000);
    /// assert_eq!(PaymentStatus::from_amounts(total, Money::zero()), PaymentStatus::Unpaid);
    /// let partial = PaymentStatus::from_amounts(total, Money::from_cents(2_500));
    /// assert_eq!(partial, PaymentStatus::PartiallyPaid);
    /// assert_eq!(PaymentStatus::from_amounts(total, total), PaymentStatus::Paid);
    /// ```
    pub fn from_amounts(total: Money, paid: Money) -> Self {
        if paid >= total {
            PaymentStatus::Paid
        } else if !paid.is_positive() {
            PaymentStatus::Unpaid
        } else {
            PaymentStatus::PartiallyPaid
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::PartiallyPaid => "partially_paid",
            PaymentStatus::Paid => "paid",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::PartiallyPaid => "Partially paid",
            PaymentStatus::Paid => "Paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownToken {
                kind: "payment status",
                value: s.to_string(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_status_default_is_pending() {
        assert_eq!(SaleStatus::default(), SaleStatus::Pending);
    }

    #[test]
    fn test_sale_status_parsing() {
        for status in SaleStatus::ALL {
            assert_eq!(status.as_str().parse::<SaleStatus>().unwrap(), status);
        }
        assert!("fast_track".parse::<SaleStatus>().is_err());
        assert!("Pending".parse::<SaleStatus>().is_err());
        assert!("".parse::<SaleStatus>().is_err());
    }

    #[test]
    fn test_parsing_agrees_with_serde_on_whitespace() {
        assert!(" pending ".parse::<SaleStatus>().is_err());
        assert!(serde_json::from_str::<SaleStatus>(r#"" pending ""#).is_err());
        assert!("paid ".parse::<PaymentStatus>().is_err());
        assert!(serde_json::from_str::<PaymentStatus>(r#""paid ""#).is_err());
    }

    #[test]
    fn test_sale_status_serde_matches_wire_token() {
        let json = serde_json::to_string(&SaleStatus::PaymentPending).unwrap();
        assert_eq!(json, "\"payment_pending\"");

        let parsed: SaleStatus = serde_json::from_str("\"partially_paid\"").unwrap();
        assert_eq!(parsed, SaleStatus::PartiallyPaid);

        assert!(serde_json::from_str::<SaleStatus>("\"fast_track\"").is_err());
    }

    #[test]
    fn test_terminal_statuses() {
        let terminal: Vec<_> = SaleStatus::ALL
            .into_iter()
            .filter(SaleStatus::is_terminal)
            .collect();
        assert_eq!(terminal, vec![SaleStatus::Completed, SaleStatus::Cancelled]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SaleStatus::PaymentPending.label(), "Payment pending");
        assert_eq!(PaymentStatus::PartiallyPaid.label(), "Partially paid");
    }

    #[test]
    fn test_payment_status_from_amounts() {
        let total = Money::from_cents(5_000);
        let paid = |cents| PaymentStatus::from_amounts(total, Money::from_cents(cents));

        assert_eq!(paid(0), PaymentStatus::Unpaid);
        assert_eq!(paid(1), PaymentStatus::PartiallyPaid);
        assert_eq!(paid(4_999), PaymentStatus::PartiallyPaid);
        assert_eq!(paid(5_000), PaymentStatus::Paid);
        assert_eq!(paid(6_000), PaymentStatus::Paid);

        // Zero-total sale has nothing left to pay
        assert_eq!(
            PaymentStatus::from_amounts(Money::zero(), Money::zero()),
            PaymentStatus::Paid
        );
    }

    #[test]
    fn test_payment_status_parsing() {
        assert_eq!("unpaid".parse::<PaymentStatus>().unwrap(), PaymentStatus::Unpaid);
        assert!("refunded".parse::<PaymentStatus>().is_err());
    }
}
