//! Auth API Handlers

use axum::{Json, extract::State};
use shared::models::{Account, AccountCreate, LoginRequest, SignIn};

use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/auth/register - 创建员工账号
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<AccountCreate>,
) -> AppResult<Json<Account>> {
    let account = state.accounts.register(payload)?;
    Ok(Json(account))
}

/// POST /api/auth/login - 登录, 返回角色和落地页
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<SignIn>> {
    let signed = state.accounts.sign_in(&payload.email, &payload.password)?;
    Ok(Json(signed))
}
