//! Table API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/tables | GET / POST | 桌台列表 / 新增桌台 |
//! | /api/tables/{n} | GET / DELETE | 桌台详情 / 删除桌台 |
//! | /api/tables/{n}/persons | POST | 添加人员 (自动选中) |
//! | /api/tables/{n}/persons/{id} | DELETE | 移除人员 |
//! | /api/tables/{n}/selection | PUT | 选中人员 |
//! | /api/tables/{n}/quantities | POST | 增减菜品数量 |
//! | /api/tables/{n}/details | POST | 添加备注 |
//! | /api/tables/{n}/submit | POST | 提交订单 |

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tables", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{number}", get(handler::get_by_number).delete(handler::delete))
        .route("/{number}/persons", post(handler::add_person))
        .route("/{number}/persons/{person_id}", delete(handler::remove_person))
        .route("/{number}/selection", put(handler::select_person))
        .route("/{number}/quantities", post(handler::adjust_quantity))
        .route("/{number}/details", post(handler::append_detail))
        .route("/{number}/submit", post(handler::submit))
}
