//! Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Category, CategoryCreate, CategoryUpdate};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/categories - 获取所有分类
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.catalog.list_categories()?))
}

/// POST /api/categories - 创建分类
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    Ok(Json(state.catalog.create_category(payload)?))
}

/// PUT /api/categories/:id - 重命名分类
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    Ok(Json(state.catalog.update_category(&id, payload)?))
}

/// DELETE /api/categories/:id - 删除分类 (菜品归入 "Otro")
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.catalog.delete_category(&id)?;
    Ok(Json(true))
}
