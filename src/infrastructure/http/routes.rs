//! HTTP Routes
//!
//! API Endpoints:
//! - /ping           GET   健康检查
//! - /posts/         GET   帖子列表（附作者）
//! - /posts/         POST  创建帖子
//! - /posts/{id}     GET   帖子详情（附作者与评论）
//! - /posts/{id}     PUT   更新帖子
//! - /users/         GET   用户列表
//! - /users/         POST  创建用户
//!
//! 集合路径同时接受带与不带结尾斜杠的形式；未声明的方法返回 405。

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(post_routes())
        .merge(user_routes())
}

/// Post 路由
fn post_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/posts", post_collection())
        .route("/posts/", post_collection())
        .route(
            "/posts/:post_id",
            get(handlers::post_details).put(handlers::update_post),
        )
}

fn post_collection() -> MethodRouter<Arc<AppState>> {
    get(handlers::list_posts).post(handlers::create_post)
}

/// User 路由
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", user_collection())
        .route("/users/", user_collection())
}

fn user_collection() -> MethodRouter<Arc<AppState>> {
    get(handlers::list_users).post(handlers::create_user)
}
