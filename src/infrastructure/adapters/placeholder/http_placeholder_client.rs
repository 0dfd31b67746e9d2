//! HTTP Placeholder Client - 调用上游 JSONPlaceholder 服务
//!
//! 实现 PlaceholderApiPort trait，持有进程级 reqwest 连接池
//!
//! 上游 API:
//! - GET/POST  {base_url}/posts
//! - GET/PUT   {base_url}/posts/{id}
//! - GET       {base_url}/comments?postId={id}
//! - GET/POST  {base_url}/users

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::application::ports::{
    CreatePostPayload, CreateUserPayload, PlaceholderApiPort, RawComment, RawPost, RawUser,
    UpdatePostPayload, UpstreamError,
};

/// HTTP 客户端配置
#[derive(Debug, Clone)]
pub struct HttpPlaceholderClientConfig {
    /// 上游服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpPlaceholderClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpPlaceholderClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP Placeholder 客户端
pub struct HttpPlaceholderClient {
    client: Client,
    config: HttpPlaceholderClientConfig,
}

impl HttpPlaceholderClient {
    /// 创建新的客户端
    pub fn new(config: HttpPlaceholderClientConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| UpstreamError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 拼接上游 URL
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// 发送请求并把响应体解码为 T
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> Result<T, UpstreamError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                UpstreamError::Timeout
            } else if e.is_connect() {
                UpstreamError::NetworkError(format!("Cannot connect to upstream: {}", e))
            } else {
                UpstreamError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(UpstreamError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(format!("{}: {}", path, e)))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, UpstreamError> {
        tracing::debug!(method = "GET", url = %self.url(path), "Calling upstream");
        self.send(self.client.get(self.url(path)), path).await
    }
}

#[async_trait]
impl PlaceholderApiPort for HttpPlaceholderClient {
    async fn list_posts(&self) -> Result<Vec<RawPost>, UpstreamError> {
        self.get("/posts").await
    }

    async fn get_post(&self, post_id: i64) -> Result<RawPost, UpstreamError> {
        self.get(&format!("/posts/{}", post_id)).await
    }

    async fn create_post(&self, payload: &CreatePostPayload) -> Result<RawPost, UpstreamError> {
        let path = "/posts";
        tracing::debug!(method = "POST", url = %self.url(path), "Calling upstream");
        self.send(self.client.post(self.url(path)).json(payload), path)
            .await
    }

    async fn update_post(
        &self,
        post_id: i64,
        payload: &UpdatePostPayload,
    ) -> Result<RawPost, UpstreamError> {
        let path = format!("/posts/{}", post_id);
        tracing::debug!(method = "PUT", url = %self.url(&path), "Calling upstream");
        self.send(self.client.put(self.url(&path)).json(payload), &path)
            .await
    }

    async fn list_comments(&self, post_id: i64) -> Result<Vec<RawComment>, UpstreamError> {
        self.get(&format!("/comments?postId={}", post_id)).await
    }

    async fn list_users(&self) -> Result<Vec<RawUser>, UpstreamError> {
        self.get("/users").await
    }

    async fn create_user(&self, payload: &CreateUserPayload) -> Result<RawUser, UpstreamError> {
        let path = "/users";
        tracing::debug!(method = "POST", url = %self.url(path), "Calling upstream");
        self.send(self.client.post(self.url(path)).json(payload), path)
            .await
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.url("/users/1"))
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode as AxumStatus, routing::get, Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    /// 在 127.0.0.1 的随机端口上启动一个本地上游，返回指向它的客户端
    async fn local_upstream() -> HttpPlaceholderClient {
        let router = Router::new()
            .route("/posts", get(|| async { AxumStatus::INTERNAL_SERVER_ERROR }))
            .route("/posts/1", get(|| async { AxumStatus::NOT_FOUND }))
            .route(
                "/posts/2",
                get(|| async { Json(json!({"userId": 3, "id": 2, "title": "t", "body": "b"})) }),
            )
            .route(
                "/comments",
                get(|| async { Json(json!([{"postId": 2, "id": 7, "name": "n", "body": "c"}])) }),
            )
            .route("/users", get(|| async { "not json at all" }));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        HttpPlaceholderClient::new(
            HttpPlaceholderClientConfig::new(format!("http://{}", addr)).with_timeout(5),
        )
        .unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = HttpPlaceholderClientConfig::default();
        assert_eq!(config.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_builder() {
        let config = HttpPlaceholderClientConfig::new("http://127.0.0.1:9000").with_timeout(5);
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client =
            HttpPlaceholderClient::new(HttpPlaceholderClientConfig::new("http://upstream.test/"))
                .unwrap();
        assert_eq!(client.url("/posts/1"), "http://upstream.test/posts/1");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_network_error() {
        // 端口 9 (discard) 上通常没有监听者
        let client = HttpPlaceholderClient::new(
            HttpPlaceholderClientConfig::new("http://127.0.0.1:9").with_timeout(2),
        )
        .unwrap();

        let err = client.list_posts().await.unwrap_err();
        assert!(matches!(
            err,
            UpstreamError::NetworkError(_) | UpstreamError::Timeout
        ));
        assert!(!client.health_check().await);
    }

    #[tokio::test]
    async fn test_upstream_404_is_not_found() {
        let client = local_upstream().await;

        let err = client.get_post(1).await.unwrap_err();
        assert!(matches!(err, UpstreamError::NotFound(ref path) if path == "/posts/1"));
    }

    #[tokio::test]
    async fn test_upstream_500_is_service_error() {
        let client = local_upstream().await;

        let err = client.list_posts().await.unwrap_err();
        assert!(matches!(err, UpstreamError::ServiceError(ref msg) if msg.contains("500")));
    }

    #[tokio::test]
    async fn test_upstream_plain_text_is_invalid_response() {
        let client = local_upstream().await;

        let err = client.list_users().await.unwrap_err();
        assert!(matches!(
            err,
            UpstreamError::InvalidResponse(ref msg) if msg.starts_with("/users")
        ));
    }

    #[tokio::test]
    async fn test_upstream_camel_case_fields_are_decoded() {
        let client = local_upstream().await;

        let post = client.get_post(2).await.unwrap();
        assert_eq!(post.id, Some(2));
        assert_eq!(post.user_id, Some(3));
        assert_eq!(post.title.as_deref(), Some("t"));

        let comments = client.list_comments(2).await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].post_id, Some(2));
        assert_eq!(comments[0].body.as_deref(), Some("c"));
    }
}
