//! # Backend API
//!
//! The fetch boundary: wire types and the `DataSource` trait with its
//! reqwest-backed implementation. Nothing in here touches UI state; errors
//! are surfaced as `ApiError` values and converted to user-facing messages
//! by the event loop.

pub mod client;
pub mod types;

pub use client::{ApiError, DataSource, HttpDataSource};
pub use types::{DataRecord, MenuItem, TextPayload, ViewKind, parse_records};
