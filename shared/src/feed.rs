//! Document feed layout
//!
//! Top-level paths of the shared document tree and the server-value
//! placeholder understood by the feed store.

use serde_json::{Value, json};

/// Dishes: `menu/{id}`
pub const MENU_PATH: &str = "menu";
/// Categories: `categorias/{id}`
pub const CATEGORIES_PATH: &str = "categorias";
/// Sections: `secciones/{id}`
pub const SECTIONS_PATH: &str = "secciones";
/// Orders: `pedidos/{table}/{id}`
pub const ORDERS_PATH: &str = "pedidos";

/// Key marking a server value placeholder
pub const SERVER_VALUE_KEY: &str = ".sv";

/// Placeholder replaced with the write time (Unix millis) by the store
pub fn server_timestamp() -> Value {
    json!({ SERVER_VALUE_KEY: "timestamp" })
}

/// Whether `value` is a server timestamp placeholder
pub fn is_server_timestamp(value: &Value) -> bool {
    value
        .as_object()
        .filter(|obj| obj.len() == 1)
        .and_then(|obj| obj.get(SERVER_VALUE_KEY))
        .and_then(Value::as_str)
        == Some("timestamp")
}

/// Path of one table's orders
pub fn table_orders_path(table: u32) -> String {
    format!("{}/{}", ORDERS_PATH, table)
}
