//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, as elsewhere in the codebase:
//!
//! - **Stateless** (props-based): `Placeholder` and the error/loading views
//!   receive everything as parameters.
//! - **Stateful** (event-driven): `SidebarState`, `TableViewState`,
//!   `TextViewState` and `ChartViewState` keep presentation state (cursor,
//!   scroll offsets, hover) between frames and handle events.
//!
//! Each component file contains everything related to that component:
//! state types, event types, rendering logic, event handling, and tests.
//! Components receive external data as props, never by reaching into
//! global state, so their dependencies stay explicit and testable.

pub mod chart_view;
pub mod placeholder;
pub mod sidebar;
pub mod table_view;
pub mod text_view;

pub use chart_view::ChartViewState;
pub use placeholder::Placeholder;
pub use sidebar::{SidebarEvent, SidebarState};
pub use table_view::TableViewState;
pub use text_view::TextViewState;

use num_format::{Locale, ToFormattedString};

/// Locale thousands separators, shared by the table rows, the table
/// summary, and the chart tooltip.
pub(crate) fn thousands(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}
