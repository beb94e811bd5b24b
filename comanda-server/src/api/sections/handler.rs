//! Section API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Section, SectionCreate};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/sections - 获取所有出品区域
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Section>>> {
    Ok(Json(state.catalog.list_sections()?))
}

/// POST /api/sections - 创建出品区域
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SectionCreate>,
) -> AppResult<Json<Section>> {
    Ok(Json(state.catalog.create_section(payload)?))
}

/// DELETE /api/sections/:id - 删除出品区域
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.catalog.delete_section(&id)?;
    Ok(Json(true))
}
