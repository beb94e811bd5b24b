//! Station view types (kitchen / cafeteria feeds)

use serde::{Deserialize, Serialize};

/// A preparation station that consumes the order feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Station {
    Kitchen,
    Cafeteria,
}

impl Station {
    /// Parse a route segment ("kitchen" / "cafeteria")
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "kitchen" => Some(Station::Kitchen),
            "cafeteria" => Some(Station::Cafeteria),
            _ => None,
        }
    }
}

/// One selection line shown on a station display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRow {
    pub order_id: String,
    pub table: u32,
    pub timestamp: i64,
    pub person_id: String,
    pub dish_id: String,
    pub dish_name: String,
    /// `None` when the dish or its category does not resolve
    pub category_name: Option<String>,
    pub quantity: u32,
    pub details: Vec<String>,
}
