//! Post HTTP Handlers

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{
    CreatePostRequest, CreatedPostResponse, PostDetailResponse, PostResponse, UpdatePostRequest,
    UpdatedPostResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ApiPath, ValidatedJson};
use crate::infrastructure::http::state::AppState;

/// 帖子列表
pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PostResponse>>, ApiError> {
    let posts = state.posts.list_posts().await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// 创建帖子
pub async fn create_post(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<CreatedPostResponse>), ApiError> {
    let created = state.posts.create_post(req.into()).await?;

    Ok((StatusCode::CREATED, Json(CreatedPostResponse::from(created))))
}

/// 帖子详情（作者 + 评论）
pub async fn post_details(
    State(state): State<Arc<AppState>>,
    ApiPath(post_id): ApiPath<i64>,
) -> Result<Json<PostDetailResponse>, ApiError> {
    let detail = state.posts.post_details(post_id).await?;

    Ok(Json(PostDetailResponse::from(detail)))
}

/// 更新帖子
pub async fn update_post(
    State(state): State<Arc<AppState>>,
    ApiPath(post_id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<UpdatePostRequest>,
) -> Result<Json<UpdatedPostResponse>, ApiError> {
    let updated = state.posts.update_post(post_id, req.into()).await?;

    Ok(Json(UpdatedPostResponse::from(updated)))
}
