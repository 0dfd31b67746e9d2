//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 出站端口（PlaceholderApiPort）
//! - posts: 帖子仓储（作者合并、评论合并）
//! - users: 用户仓储
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod posts;
pub mod users;

pub use error::ApplicationError;
pub use ports::{
    CreatePostPayload, CreateUserPayload, PlaceholderApiPort, RawComment, RawPost, RawUser,
    UpdatePostPayload, UpstreamError,
};
pub use posts::{merge_author, PostRepository};
pub use users::UserRepository;
