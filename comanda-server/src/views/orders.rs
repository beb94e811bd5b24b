//! Decoding of the order feed (`pedidos/{table}/{id}`)

use serde_json::Value;
use shared::models::{Order, OrderRecord};

/// Decode every order under `pedidos`, oldest first
///
/// Table keys that are not numbers and records that do not decode are
/// skipped with a warning. Ties keep feed order.
pub fn decode_orders(orders: &Value) -> Vec<Order> {
    let Some(tables) = orders.as_object() else {
        return Vec::new();
    };

    let mut decoded = Vec::new();
    for (table_key, table_orders) in tables {
        let Ok(table) = table_key.parse::<u32>() else {
            tracing::warn!(table = %table_key, "Skipping orders under a non-numeric table key");
            continue;
        };
        let Some(table_orders) = table_orders.as_object() else {
            continue;
        };
        for (order_id, raw) in table_orders {
            match serde_json::from_value::<OrderRecord>(raw.clone()) {
                Ok(record) => decoded.push(Order::from_record(order_id, table, record)),
                Err(e) => {
                    tracing::warn!(table, order_id = %order_id, error = %e, "Skipping malformed order");
                }
            }
        }
    }

    decoded.sort_by_key(|order| order.timestamp);
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_orders_sorted_by_timestamp() {
        let orders = decode_orders(&json!({
            "1": {
                "a": {"personas": [{"id": "p1", "seleccionados": {"d1": 1}}], "timestamp": 300}
            },
            "2": {
                "b": {"personas": [{"id": "p2"}], "timestamp": 100},
                "c": {"personas": [{"id": "p3"}], "timestamp": 200}
            }
        }));

        let ids: Vec<_> = orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert_eq!(orders[2].table, 1);
        assert_eq!(orders[2].persons[0].quantity_of("d1"), 1);
    }

    #[test]
    fn test_decode_orders_skips_bad_entries() {
        let orders = decode_orders(&json!({
            "terraza": {"x": {"personas": [], "timestamp": 1}},
            "3": {
                "ok": {"personas": [{"id": "p1"}], "timestamp": 5},
                "bad": {"personas": "nadie", "timestamp": 6}
            },
            "4": "not an object"
        }));

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, "ok");
    }

    #[test]
    fn test_decode_empty_feed() {
        assert!(decode_orders(&Value::Null).is_empty());
    }
}
