//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item entity (plato)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Serialized as a decimal string ("12.50")
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Category reference; may point at a deleted category
    pub category_id: String,
    /// Free-text routing tag, e.g. "Cocina" or "Cafetería"
    pub section: String,
}

/// Menu item record as stored at `menu/{id}`
///
/// The price stays text on the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemRecord {
    #[serde(rename = "nombre_comida")]
    pub name: String,
    #[serde(rename = "precio_comida", with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(rename = "categoria_id", default)]
    pub category_id: String,
    #[serde(rename = "seccion", default)]
    pub section: String,
}

impl MenuItem {
    pub fn from_record(id: impl Into<String>, record: MenuItemRecord) -> Self {
        Self {
            id: id.into(),
            name: record.name,
            price: record.price,
            category_id: record.category_id,
            section: record.section,
        }
    }

    pub fn to_record(&self) -> MenuItemRecord {
        MenuItemRecord {
            name: self.name.clone(),
            price: self.price,
            category_id: self.category_id.clone(),
            section: self.section.clone(),
        }
    }
}

/// Create menu item payload
///
/// `price` arrives as typed text and is parsed server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
}

/// Update menu item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub price: Option<String>,
    pub category_id: Option<String>,
    pub section: Option<String>,
}
