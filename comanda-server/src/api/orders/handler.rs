//! Order feed API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::feed::ORDERS_PATH;
use shared::models::Order;

use crate::core::ServerState;
use crate::utils::AppResult;
use crate::views::decode_orders;

#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub table: Option<u32>,
}

/// GET /api/orders?table= - 已提交订单, 按时间排序
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrdersQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let mut orders = decode_orders(&state.feed.get(ORDERS_PATH)?);
    if let Some(table) = query.table {
        orders.retain(|order| order.table == table);
    }
    Ok(Json(orders))
}
