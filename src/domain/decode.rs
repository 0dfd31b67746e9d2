//! 上游载荷解码错误
//!
//! 上游 JSON 先被解码为字段全部可选的原始记录，再逐字段校验转换为领域类型。
//! 字段缺失时返回结构化的 DecodeError，而不是让缺失值继续向下传播。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{entity} payload is missing field `{field}`")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity} payload has invalid field `{field}`: {reason}")]
    InvalidField {
        entity: &'static str,
        field: &'static str,
        reason: String,
    },
}

impl DecodeError {
    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        Self::MissingField { entity, field }
    }
}

/// 取出必填字段，缺失时返回 MissingField
pub fn require<T>(
    value: Option<T>,
    entity: &'static str,
    field: &'static str,
) -> Result<T, DecodeError> {
    value.ok_or_else(|| DecodeError::missing(entity, field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_present() {
        assert_eq!(require(Some(7), "Post", "id"), Ok(7));
    }

    #[test]
    fn test_require_missing() {
        let err = require::<i64>(None, "Post", "id").unwrap_err();
        assert_eq!(err, DecodeError::missing("Post", "id"));
        assert_eq!(err.to_string(), "Post payload is missing field `id`");
    }
}
