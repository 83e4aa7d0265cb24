//! # Sale Status Workflow
//!
//! Which status changes a user may request next, and what they resolve to.
//!
//! ## Transition Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Current status   │ Allowed next (order = button order)                │
//! │  ─────────────────┼─────────────────────────────────────────────────── │
//! │  pending          │ confirmed, cancelled, fast_track                   │
//! │  confirmed        │ payment_pending, cancelled, fast_track             │
//! │  payment_pending  │ partially_paid, paid, cancelled, fast_track        │
//! │  partially_paid   │ paid, cancelled, fast_track                        │
//! │  paid             │ shipped, cancelled, fast_track                     │
//! │  shipped          │ delivered, cancelled, fast_track                   │
//! │  delivered        │ completed, cancelled                               │
//! │  completed        │ -                                                  │
//! │  cancelled        │ -                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `delivered` has no fast-track entry. Keep it that way until the backend
//! says otherwise.
//!
//! ## Fast-Track
//! `fast_track` is a shortcut, not a status. Selecting it requests
//! `completed` whatever the current intermediate status is, and it has no
//! chip label of its own.
//!
//! The backend re-validates every request. This table only drives which
//! controls are enabled and lets the client fail fast.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{TransitionError, ValidationError};
use crate::status::SaleStatus;

/// Wire token of the fast-track shortcut.
pub const FAST_TRACK_TOKEN: &str = "fast_track";

// =============================================================================
// Status Action
// =============================================================================

/// A choice offered to the user for the sale's next step.
///
/// Serialized as a bare token (`"confirmed"`, `"fast_track"`, ...) so the
/// front end can keep using the strings it already renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(into = "String", try_from = "String")]
#[ts(export, type = "string")]
pub enum StatusAction {
    /// Move to exactly this status.
    Advance(SaleStatus),
    /// Jump straight to `completed`.
    FastTrack,
}

impl StatusAction {
    /// The status that will actually be sent to the backend.
    ///
    /// ```rust
    /// use salesflow_core::{SaleStatus, StatusAction};
    ///
    /// assert_eq!(StatusAction::FastTrack.target(), SaleStatus::Completed);
    /// assert_eq!(StatusAction::Advance(SaleStatus::Shipped).target(), SaleStatus::Shipped);
    /// ```
    #[inline]
    pub const fn target(&self) -> SaleStatus {
        match self {
            StatusAction::Advance(status) => *status,
            StatusAction::FastTrack => SaleStatus::Completed,
        }
    }

    /// Chip label. Fast-track has none.
    pub const fn label(&self) -> Option<&'static str> {
        match self {
            StatusAction::Advance(status) => Some(status.label()),
            StatusAction::FastTrack => None,
        }
    }

    #[inline]
    pub const fn is_fast_track(&self) -> bool {
        matches!(self, StatusAction::FastTrack)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            StatusAction::Advance(status) => status.as_str(),
            StatusAction::FastTrack => FAST_TRACK_TOKEN,
        }
    }
}

impl From<SaleStatus> for StatusAction {
    fn from(status: SaleStatus) -> Self {
        StatusAction::Advance(status)
    }
}

impl fmt::Display for StatusAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == FAST_TRACK_TOKEN {
            return Ok(StatusAction::FastTrack);
        }
        s.parse::<SaleStatus>()
            .map(StatusAction::Advance)
            .map_err(|_| ValidationError::UnknownToken {
                kind: "status action",
                value: s.to_string(),
            })
    }
}

impl From<StatusAction> for String {
    fn from(action: StatusAction) -> Self {
        action.as_str().to_string()
    }
}

impl TryFrom<String> for StatusAction {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Transition Table
// =============================================================================

use StatusAction::{Advance, FastTrack};

const FROM_PENDING: &[StatusAction] = &[
    Advance(SaleStatus::Confirmed),
    Advance(SaleStatus::Cancelled),
    FastTrack,
];

const FROM_CONFIRMED: &[StatusAction] = &[
    Advance(SaleStatus::PaymentPending),
    Advance(SaleStatus::Cancelled),
    FastTrack,
];

const FROM_PAYMENT_PENDING: &[StatusAction] = &[
    Advance(SaleStatus::PartiallyPaid),
    Advance(SaleStatus::Paid),
    Advance(SaleStatus::Cancelled),
    FastTrack,
];

const FROM_PARTIALLY_PAID: &[StatusAction] = &[
    Advance(SaleStatus::Paid),
    Advance(SaleStatus::Cancelled),
    FastTrack,
];

const FROM_PAID: &[StatusAction] = &[
    Advance(SaleStatus::Shipped),
    Advance(SaleStatus::Cancelled),
    FastTrack,
];

const FROM_SHIPPED: &[StatusAction] = &[
    Advance(SaleStatus::Delivered),
    Advance(SaleStatus::Cancelled),
    FastTrack,
];

const FROM_DELIVERED: &[StatusAction] = &[
    Advance(SaleStatus::Completed),
    Advance(SaleStatus::Cancelled),
];

const TERMINAL: &[StatusAction] = &[];

/// Ordered actions offered from `current`. Empty for terminal statuses.
pub const fn allowed_actions(current: SaleStatus) -> &'static [StatusAction] {
    match current {
        SaleStatus::Pending => FROM_PENDING,
        SaleStatus::Confirmed => FROM_CONFIRMED,
        SaleStatus::PaymentPending => FROM_PAYMENT_PENDING,
        SaleStatus::PartiallyPaid => FROM_PARTIALLY_PAID,
        SaleStatus::Paid => FROM_PAID,
        SaleStatus::Shipped => FROM_SHIPPED,
        SaleStatus::Delivered => FROM_DELIVERED,
        SaleStatus::Completed | SaleStatus::Cancelled => TERMINAL,
    }
}

/// Allowed actions as real statuses, with fast-track filtered out.
/// This is what gets rendered as chips.
pub fn chip_statuses(current: SaleStatus) -> Vec<SaleStatus> {
    allowed_actions(current)
        .iter()
        .filter_map(|action| match action {
            Advance(status) => Some(*status),
            FastTrack => None,
        })
        .collect()
}

pub fn offers_fast_track(current: SaleStatus) -> bool {
    allowed_actions(current).contains(&FastTrack)
}

pub fn is_allowed(current: SaleStatus, action: StatusAction) -> bool {
    allowed_actions(current).contains(&action)
}

/// True when some offered action resolves to `target`.
pub fn can_reach(current: SaleStatus, target: SaleStatus) -> bool {
    allowed_actions(current)
        .iter()
        .any(|action| action.target() == target)
}

/// Checks `action` against the table and returns the status to request.
///
/// ## Example
/// ```rust
/// use salesflow_core::workflow::validate_transition;
/// use salesflow_core::{SaleStatus, StatusAction, TransitionError};
///
/// assert_eq!(
///     validate_transition(SaleStatus::Confirmed, StatusAction::FastTrack),
///     Ok(SaleStatus::Completed)
/// );
/// assert!(matches!(
///     validate_transition(SaleStatus::Pending, StatusAction::Advance(SaleStatus::Paid)),
///     Err(TransitionError::NotAllowed { .. })
/// ));
/// ```
pub fn validate_transition(
    current: SaleStatus,
    action: StatusAction,
) -> Result<SaleStatus, TransitionError> {
    if current.is_terminal() {
        return Err(TransitionError::Terminal { from: current });
    }

    if !is_allowed(current, action) {
        return Err(TransitionError::NotAllowed {
            from: current,
            requested: action,
        });
    }

    Ok(action.target())
}

// =============================================================================
// Unit Tests
// =============================================================================
