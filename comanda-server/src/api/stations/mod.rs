//! Station API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/stations/{station} | GET | 当前出品行 (kitchen / cafeteria) |
//! | /api/stations/{station}/live | GET | SSE, 每次 feed 变更推送全部行 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/stations", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{station}", get(handler::rows))
        .route("/{station}/live", get(handler::live))
}
