//! 领域层
//!
//! - post/: 帖子上下文（Post、PostDetail、Comment、Author）
//! - user/: 用户上下文（User、Email）
//! - decode: 上游载荷解码错误

pub mod decode;
pub mod post;
pub mod user;

pub use decode::DecodeError;
pub use post::{Author, AuthorError, Comment, CreatedPost, Post, PostDetail, UpdatedPost};
pub use user::{Email, EmailError, User};
