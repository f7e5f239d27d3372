//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{ApiError, DataSource, MenuItem};
use crate::core::state::{App, FetchState};

/// A canned source for tests that don't need a real backend.
pub struct StaticSource {
    pub menu: Vec<MenuItem>,
    pub payload: Value,
}

#[async_trait]
impl DataSource for StaticSource {
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        Ok(self.menu.clone())
    }

    async fn fetch_resource(&self, _key: &str) -> Result<Value, ApiError> {
        Ok(self.payload.clone())
    }
}

/// The backend's real menu shape: table, chart, about.
pub fn test_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: 1,
            name: "table".to_string(),
            label: "Table".to_string(),
        },
        MenuItem {
            id: 2,
            name: "chart".to_string(),
            label: "Chart".to_string(),
        },
        MenuItem {
            id: 3,
            name: "about".to_string(),
            label: "About".to_string(),
        },
    ]
}

/// Creates an App with the test menu already loaded.
pub fn test_app() -> App {
    let mut app = App::new();
    app.menu = FetchState::Ready(test_menu());
    app
}
