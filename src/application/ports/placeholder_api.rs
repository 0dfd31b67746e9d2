//! Placeholder API Port - 上游 REST 服务抽象
//!
//! 上游暴露 posts / users / comments 三类资源，具体实现在 infrastructure/adapters 层。
//! 原始记录的字段全部可选，由应用层逐字段校验后转换为领域类型。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 上游调用错误
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Upstream resource not found: {0}")]
    NotFound(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 上游帖子记录
///
/// 列表/详情返回 userId，创建接口回显 author_id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPost {
    pub id: Option<i64>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    pub title: Option<String>,
    pub body: Option<String>,
}

/// 上游用户记录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawUser {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// 上游评论记录（其余字段如 name、email 会被丢弃）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawComment {
    pub id: Option<i64>,
    #[serde(rename = "postId")]
    pub post_id: Option<i64>,
    pub body: Option<String>,
}

/// 创建帖子请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePostPayload {
    pub author_id: i64,
    pub title: String,
    pub body: String,
}

/// 更新帖子请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePostPayload {
    pub title: String,
    pub body: String,
}

/// 创建用户请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserPayload {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
}

/// Placeholder API Port
///
/// 每个方法对应一次上游 HTTP 调用
#[async_trait]
pub trait PlaceholderApiPort: Send + Sync {
    /// GET /posts
    async fn list_posts(&self) -> Result<Vec<RawPost>, UpstreamError>;

    /// GET /posts/{id}
    async fn get_post(&self, post_id: i64) -> Result<RawPost, UpstreamError>;

    /// POST /posts
    async fn create_post(&self, payload: &CreatePostPayload) -> Result<RawPost, UpstreamError>;

    /// PUT /posts/{id}
    async fn update_post(
        &self,
        post_id: i64,
        payload: &UpdatePostPayload,
    ) -> Result<RawPost, UpstreamError>;

    /// GET /comments?postId={id}
    async fn list_comments(&self, post_id: i64) -> Result<Vec<RawComment>, UpstreamError>;

    /// GET /users
    async fn list_users(&self) -> Result<Vec<RawUser>, UpstreamError>;

    /// POST /users
    async fn create_user(&self, payload: &CreateUserPayload) -> Result<RawUser, UpstreamError>;

    /// 检查上游服务是否可用
    async fn health_check(&self) -> bool {
        true
    }
}
