//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

use crate::catalog::MenuGroup;
use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/menu - 所有菜品 (按 id 排序)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    Ok(Json(state.catalog.list_menu()?))
}

#[derive(Debug, Deserialize)]
pub struct GroupedQuery {
    pub section: Option<String>,
}

/// GET /api/menu/grouped?section= - 按分类分组的菜单
pub async fn grouped(
    State(state): State<ServerState>,
    Query(query): Query<GroupedQuery>,
) -> AppResult<Json<Vec<MenuGroup>>> {
    let section = query.section.as_deref().filter(|s| !s.is_empty());
    Ok(Json(state.catalog.grouped_menu(section)?))
}

/// GET /api/menu/:id - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(state.catalog.get_menu_item(&id)?))
}

/// POST /api/menu - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(state.catalog.create_menu_item(payload)?))
}

/// PUT /api/menu/:id - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    Ok(Json(state.catalog.update_menu_item(&id, payload)?))
}

/// DELETE /api/menu/:id - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.catalog.delete_menu_item(&id)?;
    Ok(Json(true))
}
