//! # Core Application Logic
//!
//! This module contains Glimpse's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • dispatch / chart /   │
//!                    │    text (view logic)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │    API     │
//!     │  Adapter   │      │  Adapter   │      │  boundary  │
//!     │ (ratatui)  │      │  (future)  │      │ (reqwest)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`dispatch`]: View-kind to render-mode mapping
//! - [`chart`]: Bar-chart math (windowing, scales, colors, labels)
//! - [`text`]: Payload-to-text normalization and stats
//! - [`config`]: Settings resolution (defaults → file → env → CLI)

pub mod action;
pub mod chart;
pub mod config;
pub mod dispatch;
pub mod state;
pub mod text;
