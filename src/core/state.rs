//! # Application State
//!
//! Core business state for Glimpse. This module contains domain data only -
//! no TUI-specific types. Presentation state (cursor position, scroll
//! offsets, hover) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── menu: FetchState<Vec<MenuItem>>   // sidebar items (fetched once)
//! ├── selected: Option<usize>           // index into the loaded menu
//! ├── content: FetchState<Value>        // the selected view's payload
//! ├── request_token: u64                // stale-response guard
//! └── status_message: String            // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use serde_json::Value;

use crate::api::MenuItem;

/// Lifecycle of one fetched resource. A new value replaces the old one on
/// every transition; nothing is mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Nothing requested yet (or selection cleared).
    Idle,
    /// A fetch is in flight. No timeout policy: a hung fetch stays here.
    Pending,
    Ready(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }
}

pub struct App {
    pub menu: FetchState<Vec<MenuItem>>,
    pub selected: Option<usize>,
    pub content: FetchState<Value>,
    /// Bumped every time a content fetch is issued. A completion whose
    /// token no longer matches is stale and gets discarded.
    pub request_token: u64,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self {
            menu: FetchState::Pending,
            selected: None,
            content: FetchState::Idle,
            request_token: 0,
            status_message: String::from("Welcome to Glimpse!"),
        }
    }

    /// The currently selected menu item, if the menu is loaded and a
    /// selection is active.
    pub fn selected_item(&self) -> Option<&MenuItem> {
        match (&self.menu, self.selected) {
            (FetchState::Ready(items), Some(index)) => items.get(index),
            _ => None,
        }
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        match &self.menu {
            FetchState::Ready(items) => items,
            _ => &[],
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
