//! Order sink - where submitted orders go

use serde_json::Value;
use shared::feed::table_orders_path;

use crate::feed::FeedStore;
use crate::utils::AppResult;

/// Destination of submitted orders
///
/// One call is one append; implementations do not retry.
pub trait OrderSink: Send + Sync {
    /// Append `record` under the table's orders, returning the new order id
    fn append_order(&self, table: u32, record: Value) -> AppResult<String>;
}

/// Appends orders to `pedidos/{table}` on the document feed
#[derive(Debug, Clone)]
pub struct FeedOrderSink {
    feed: FeedStore,
}

impl FeedOrderSink {
    pub fn new(feed: FeedStore) -> Self {
        Self { feed }
    }
}

impl OrderSink for FeedOrderSink {
    fn append_order(&self, table: u32, record: Value) -> AppResult<String> {
        let id = self.feed.push(&table_orders_path(table), record)?;
        tracing::info!(table, order_id = %id, "Order submitted");
        Ok(id)
    }
}
