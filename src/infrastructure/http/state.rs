//! Application State
//!
//! 仓储在启动时构造一次，通过 Arc<AppState> 显式注入各 handler

use std::sync::Arc;

use crate::application::{PlaceholderApiPort, PostRepository, UserRepository};

/// 应用状态
pub struct AppState {
    pub upstream: Arc<dyn PlaceholderApiPort>,
    pub posts: PostRepository,
    pub users: UserRepository,
}

impl AppState {
    /// 基于同一个上游客户端创建两个仓储
    pub fn new(upstream: Arc<dyn PlaceholderApiPort>) -> Self {
        Self {
            posts: PostRepository::new(upstream.clone()),
            users: UserRepository::new(upstream.clone()),
            upstream,
        }
    }
}
