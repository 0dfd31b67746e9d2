//! User HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{CreateUserRequest, UserResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::ValidatedJson;
use crate::infrastructure::http::state::AppState;

/// 用户列表
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.users.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// 创建用户
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.users.create_user(req.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
