//! 应用层错误定义

use thiserror::Error;

use crate::application::ports::UpstreamError;
use crate::domain::DecodeError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 上游资源不存在
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// 上游调用失败（网络、超时、非预期状态码、非 JSON 响应）
    #[error("Upstream error: {0}")]
    Upstream(UpstreamError),

    /// 上游载荷与目标结构不符
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl From<UpstreamError> for ApplicationError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::NotFound(resource) => Self::NotFound(resource),
            other => Self::Upstream(other),
        }
    }
}
