//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 注册和登录
//! - [`menu`] - 菜品管理和分组菜单
//! - [`categories`] - 分类管理
//! - [`sections`] - 出品区域管理
//! - [`tables`] - 桌台和点单
//! - [`orders`] - 已提交订单
//! - [`stations`] - 厨房 / 咖啡吧视图

pub mod auth;
pub mod categories;
pub mod health;
pub mod menu;
pub mod orders;
pub mod sections;
pub mod stations;
pub mod tables;

use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());
    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(menu::router())
        .merge(categories::router())
        .merge(sections::router())
        .merge(tables::router())
        .merge(orders::router())
        .merge(stations::router())
}

/// Router with state and middleware, ready to serve
pub fn router(state: ServerState) -> Router {
    build_app().with_state(state).layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(log_request))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}
