//! postbridge - JSONPlaceholder 聚合代理
//!
//! 对外暴露 posts / users 资源，每个请求转发到上游 REST 服务，
//! 合并作者、评论后按固定 schema 返回。
//!
//! 领域层 (domain/):
//! - Post Context: Post、PostDetail、Comment、Author
//! - User Context: User、Email
//!
//! 应用层 (application/):
//! - Ports: PlaceholderApiPort
//! - PostRepository / UserRepository: 上游调用编排与合并
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Adapters: reqwest 上游客户端、内存上游

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
