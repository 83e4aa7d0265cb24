//! # salesflow-core: Sale Status Workflow
//!
//! Pure business rules for the sale lifecycle of the ERP front end. The UI
//! used to encode these as inline branches inside a component; here they are
//! a constant table with no rendering or network dependency.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Front end (action buttons, status chips)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        salesflow-client (SaleSession, SalesGateway)             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ salesflow-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  status   │  │ workflow  │  │   sale    │  │   money   │  │   │
//! │  │   │SaleStatus │  │  Action   │  │   Sale    │  │   Money   │  │   │
//! │  │   │PaymentSt. │  │   table   │  │  Totals   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`status`] - `SaleStatus` and `PaymentStatus`
//! - [`workflow`] - Transition table and fast-track resolution
//! - [`sale`] - The sale record and its status update request
//! - [`money`] - Integer money for sale totals
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use salesflow_core::{workflow, SaleStatus, StatusAction};
//!
//! let actions = workflow::allowed_actions(SaleStatus::Paid);
//! assert!(actions.contains(&StatusAction::FastTrack));
//!
//! // Fast-track always resolves to `completed`
//! let target = workflow::validate_transition(SaleStatus::Paid, StatusAction::FastTrack).unwrap();
//! assert_eq!(target, SaleStatus::Completed);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod sale;
pub mod status;
pub mod validation;
pub mod workflow;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, TransitionError, ValidationError};
pub use money::Money;
pub use sale::{Sale, SaleTotals, StatusUpdateRequest};
pub use status::{PaymentStatus, SaleStatus};
pub use workflow::StatusAction;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a sale reference string (e.g. `S-2024/00042`).
pub const MAX_REFERENCE_LEN: usize = 50;
