//! In-Memory Placeholder Client - 不访问网络的上游实现
//!
//! 行为与 JSONPlaceholder 一致：创建/更新只回显，不持久化。
//! 用于测试和 `upstream.fake = true` 的离线模式，并记录每次上游调用。

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{
    CreatePostPayload, CreateUserPayload, PlaceholderApiPort, RawComment, RawPost, RawUser,
    UpdatePostPayload, UpstreamError,
};

/// 内存上游
#[derive(Default)]
pub struct InMemoryPlaceholderClient {
    posts: Vec<RawPost>,
    users: Vec<RawUser>,
    comments: Vec<RawComment>,
    /// 调用记录，形如 "GET /posts"
    calls: Mutex<Vec<String>>,
}

impl InMemoryPlaceholderClient {
    /// 空数据集
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置一小份与上游同构的数据
    pub fn seeded() -> Self {
        let users = [
            (1, "Leanne Graham", "Bret", "Sincere@april.biz", "1-770-736-8031 x56442"),
            (2, "Ervin Howell", "Antonette", "Shanna@melissa.tv", "010-692-6593 x09125"),
            (3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net", "1-463-123-4447"),
        ]
        .into_iter()
        .map(|(id, name, username, email, phone)| RawUser {
            id: Some(id),
            name: Some(name.to_string()),
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            phone: Some(phone.to_string()),
        })
        .collect();

        let posts = [
            (1, 1, "sunt aut facere repellat provident", "quia et suscipit suscipit recusandae"),
            (2, 1, "qui est esse", "est rerum tempore vitae sequi sint"),
            (3, 2, "ea molestias quasi exercitationem", "et iusto sed quo iure voluptatem"),
            (4, 3, "eum et est occaecati", "ullam et saepe reiciendis voluptatem"),
        ]
        .into_iter()
        .map(|(id, user_id, title, body)| RawPost {
            id: Some(id),
            user_id: Some(user_id),
            author_id: None,
            title: Some(title.to_string()),
            body: Some(body.to_string()),
        })
        .collect();

        let comments = [
            (1, 1, "laudantium enim quasi est quidem magnam"),
            (2, 1, "est natus enim nihil est dolore omnis"),
            (3, 2, "quia molestiae reprehenderit quasi aspernatur"),
            (4, 3, "non et atque occaecati deserunt quas"),
        ]
        .into_iter()
        .map(|(id, post_id, body)| RawComment {
            id: Some(id),
            post_id: Some(post_id),
            body: Some(body.to_string()),
        })
        .collect();

        Self::new()
            .with_users(users)
            .with_posts(posts)
            .with_comments(comments)
    }

    pub fn with_posts(mut self, posts: Vec<RawPost>) -> Self {
        self.posts = posts;
        self
    }

    pub fn with_users(mut self, users: Vec<RawUser>) -> Self {
        self.users = users;
        self
    }

    pub fn with_comments(mut self, comments: Vec<RawComment>) -> Self {
        self.comments = comments;
        self
    }

    /// 已发生的上游调用，按调用顺序
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: String) {
        tracing::debug!(call = %call, "In-memory upstream call");
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn find_post(&self, post_id: i64) -> Option<&RawPost> {
        self.posts.iter().find(|p| p.id == Some(post_id))
    }

    /// 上游为新记录分配的 id（数据集长度 + 1）
    fn next_id(len: usize) -> i64 {
        i64::try_from(len).map(|n| n + 1).unwrap_or(i64::MAX)
    }
}

#[async_trait]
impl PlaceholderApiPort for InMemoryPlaceholderClient {
    async fn list_posts(&self) -> Result<Vec<RawPost>, UpstreamError> {
        self.record("GET /posts".to_string());
        Ok(self.posts.clone())
    }

    async fn get_post(&self, post_id: i64) -> Result<RawPost, UpstreamError> {
        let path = format!("/posts/{}", post_id);
        self.record(format!("GET {}", path));
        self.find_post(post_id)
            .cloned()
            .ok_or(UpstreamError::NotFound(path))
    }

    async fn create_post(&self, payload: &CreatePostPayload) -> Result<RawPost, UpstreamError> {
        self.record("POST /posts".to_string());
        Ok(RawPost {
            id: Some(Self::next_id(self.posts.len())),
            user_id: None,
            author_id: Some(payload.author_id),
            title: Some(payload.title.clone()),
            body: Some(payload.body.clone()),
        })
    }

    async fn update_post(
        &self,
        post_id: i64,
        payload: &UpdatePostPayload,
    ) -> Result<RawPost, UpstreamError> {
        let path = format!("/posts/{}", post_id);
        self.record(format!("PUT {}", path));
        if self.find_post(post_id).is_none() {
            return Err(UpstreamError::NotFound(path));
        }

        Ok(RawPost {
            id: Some(post_id),
            user_id: None,
            author_id: None,
            title: Some(payload.title.clone()),
            body: Some(payload.body.clone()),
        })
    }

    async fn list_comments(&self, post_id: i64) -> Result<Vec<RawComment>, UpstreamError> {
        self.record(format!("GET /comments?postId={}", post_id));
        Ok(self
            .comments
            .iter()
            .filter(|c| c.post_id == Some(post_id))
            .cloned()
            .collect())
    }

    async fn list_users(&self) -> Result<Vec<RawUser>, UpstreamError> {
        self.record("GET /users".to_string());
        Ok(self.users.clone())
    }

    async fn create_user(&self, payload: &CreateUserPayload) -> Result<RawUser, UpstreamError> {
        self.record("POST /users".to_string());
        Ok(RawUser {
            id: Some(Self::next_id(self.users.len())),
            name: Some(payload.name.clone()),
            username: Some(payload.username.clone()),
            email: Some(payload.email.clone()),
            phone: Some(payload.phone.clone()),
        })
    }
}
