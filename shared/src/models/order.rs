//! Order Model (Pedido)

use serde::{Deserialize, Serialize};

use super::Person;

/// A submitted order, as read back from `pedidos/{table}/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub table: u32,
    pub persons: Vec<Person>,
    /// Server-assigned write time (Unix millis)
    pub timestamp: i64,
}

/// Order record as stored on the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(rename = "personas", default)]
    pub persons: Vec<Person>,
    #[serde(default)]
    pub timestamp: i64,
}

impl Order {
    pub fn from_record(id: impl Into<String>, table: u32, record: OrderRecord) -> Self {
        Self {
            id: id.into(),
            table,
            persons: record.persons,
            timestamp: record.timestamp,
        }
    }
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedOrder {
    pub id: String,
    pub table: u32,
}
