use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The kind of view a menu item resolves to.
///
/// Derived from the backend's free-form `name` tag. The backend only
/// promises "table", "chart" and "about"; anything else becomes `Other`
/// and degrades to the text view instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewKind {
    Table,
    Chart,
    About,
    Other,
}

impl ViewKind {
    pub fn from_tag(tag: &str) -> ViewKind {
        match tag {
            "table" => ViewKind::Table,
            "chart" => ViewKind::Chart,
            "about" => ViewKind::About,
            _ => ViewKind::Other,
        }
    }
}

/// A navigation menu entry as served by `GET /api/getMenu`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i64,
    /// Type tag ("table", "chart", "about", or anything else).
    pub name: String,
    /// Human-readable label shown in the sidebar.
    pub label: String,
}

impl MenuItem {
    pub fn kind(&self) -> ViewKind {
        ViewKind::from_tag(&self.name)
    }

    /// The backend resource key this item's content is fetched under.
    ///
    /// Table and chart are two presentations of the same population
    /// dataset; unknown names are tried verbatim.
    pub fn resource_key(&self) -> &str {
        match self.kind() {
            ViewKind::Table | ViewKind::Chart => "us_population_data",
            ViewKind::About => "about",
            ViewKind::Other => &self.name,
        }
    }
}

/// One population measurement.
///
/// `population` is unsigned on purpose: a negative value in the payload is
/// a data-quality violation and fails record parsing, which downstream
/// views treat as "no data" rather than a crash.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRecord {
    pub year: i32,
    pub population: u64,
}

/// The about endpoint's payload shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TextPayload {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

/// Tries to interpret a fetched payload as a record series.
///
/// Returns `None` when the payload is not an array of records at all;
/// `Some(vec![])` when it is a structurally valid but empty series. Both
/// end up on the "no data" path, but the distinction keeps logging honest.
pub fn parse_records(payload: &Value) -> Option<Vec<DataRecord>> {
    match payload {
        Value::Array(_) => serde_json::from_value(payload.clone()).ok(),
        _ => None,
    }
}
