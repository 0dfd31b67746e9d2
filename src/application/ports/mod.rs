//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod placeholder_api;

pub use placeholder_api::{
    CreatePostPayload, CreateUserPayload, PlaceholderApiPort, RawComment, RawPost, RawUser,
    UpdatePostPayload, UpstreamError,
};
