//! # salesflow-client
//!
//! Everything between the workflow table and the backend.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  UI picks an action (e.g. fast_track)                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  SaleSession::request()                                                │
//! │         │                                                               │
//! │         ├── not in table? ──► ApiError(VALIDATION_ERROR), no call      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  SalesGateway::update_status({ "status": "completed" })               │
//! │         │                                                               │
//! │         ├── non-2xx? ──► ApiError(REJECTED, server message verbatim)   │
//! │         │                local copy untouched                           │
//! │         ▼                                                               │
//! │  local copy replaced with the backend's sale                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`config`] - Client configuration (TOML file + `SALESFLOW_*` env)
//! - [`gateway`] - The backend seam (`SalesGateway`)
//! - [`memory`] - In-memory authoritative backend
//! - [`session`] - Optimistic sale copy and transition submission
//! - [`error`] - `ApiError` returned to the UI
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod memory;
pub mod session;

pub use config::{ClientConfig, ConfigError};
pub use error::{ApiError, ErrorCode};
pub use gateway::{GatewayError, GatewayResult, SalesGateway};
pub use memory::InMemorySalesBackend;
pub use session::SaleSession;
