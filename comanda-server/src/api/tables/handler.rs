//! Table API Handlers
//!
//! Composer mutations answer with the whole table state so the client can
//! re-render the roster in one go.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::SubmittedOrder;

use crate::composer::{Direction, TableState};
use crate::core::ServerState;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};

#[derive(Debug, Deserialize)]
pub struct SelectPersonRequest {
    pub person_id: String,
}

#[derive(Debug, Deserialize)]
pub struct AdjustQuantityRequest {
    pub menu_item_id: String,
    pub direction: Direction,
}

#[derive(Debug, Deserialize)]
pub struct AppendDetailRequest {
    pub text: String,
}

/// GET /api/tables - 桌台列表
pub async fn list(State(state): State<ServerState>) -> Json<Vec<TableState>> {
    Json(state.tables.list())
}

/// POST /api/tables - 新增桌台 (编号 = 最大编号 + 1)
pub async fn create(State(state): State<ServerState>) -> Json<TableState> {
    Json(state.tables.add_table())
}

/// GET /api/tables/:number - 桌台详情
pub async fn get_by_number(
    State(state): State<ServerState>,
    Path(number): Path<u32>,
) -> AppResult<Json<TableState>> {
    Ok(Json(state.tables.get(number)?))
}

/// DELETE /api/tables/:number - 删除桌台
pub async fn delete(
    State(state): State<ServerState>,
    Path(number): Path<u32>,
) -> AppResult<Json<bool>> {
    state.tables.remove_table(number)?;
    Ok(Json(true))
}

/// POST /api/tables/:number/persons - 添加人员
pub async fn add_person(
    State(state): State<ServerState>,
    Path(number): Path<u32>,
) -> AppResult<Json<TableState>> {
    let table = state.tables.compose(number, |composer| {
        composer.add_person();
    })?;
    Ok(Json(table))
}

/// DELETE /api/tables/:number/persons/:person_id - 移除人员
pub async fn remove_person(
    State(state): State<ServerState>,
    Path((number, person_id)): Path<(u32, String)>,
) -> AppResult<Json<TableState>> {
    let table = state.tables.compose(number, |composer| {
        composer.remove_person(&person_id);
    })?;
    Ok(Json(table))
}

/// PUT /api/tables/:number/selection - 选中人员
pub async fn select_person(
    State(state): State<ServerState>,
    Path(number): Path<u32>,
    Json(payload): Json<SelectPersonRequest>,
) -> AppResult<Json<TableState>> {
    let table = state.tables.compose(number, |composer| {
        composer.select_person(payload.person_id);
    })?;
    Ok(Json(table))
}

/// POST /api/tables/:number/quantities - 增减选中人员的菜品数量
pub async fn adjust_quantity(
    State(state): State<ServerState>,
    Path(number): Path<u32>,
    Json(payload): Json<AdjustQuantityRequest>,
) -> AppResult<Json<TableState>> {
    let table = state.tables.compose(number, |composer| {
        composer.adjust_quantity(&payload.menu_item_id, payload.direction);
    })?;
    Ok(Json(table))
}

/// POST /api/tables/:number/details - 为选中人员添加备注
pub async fn append_detail(
    State(state): State<ServerState>,
    Path(number): Path<u32>,
    Json(payload): Json<AppendDetailRequest>,
) -> AppResult<Json<TableState>> {
    validate_required_text(&payload.text, "detail", MAX_NOTE_LEN)?;
    let table = state.tables.compose(number, |composer| {
        composer.append_detail(payload.text);
    })?;
    Ok(Json(table))
}

/// POST /api/tables/:number/submit - 提交订单到 pedidos/{number}
pub async fn submit(
    State(state): State<ServerState>,
    Path(number): Path<u32>,
) -> AppResult<Json<SubmittedOrder>> {
    Ok(Json(state.tables.submit(number)?))
}
