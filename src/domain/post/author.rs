//! Post Context - Author
//!
//! 帖子的作者信息由 users 列表按 id 合并而来。
//!
//! 不变量:
//! - 要么包含完整的 {id, name, email}
//! - 要么是单一的 {"error": ...}，绝不产生部分作者记录

use serde::Serialize;

/// 作者查找失败的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AuthorError {
    /// 匹配到的用户记录缺少 name 或 email
    KeyError,
    /// 没有任何用户的 id 与帖子的 userId 相等
    NotFound,
}

/// 嵌入在帖子里的作者
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Author {
    Known { id: i64, name: String, email: String },
    Unavailable { error: AuthorError },
}

impl Author {
    pub fn known(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::Known {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn key_error() -> Self {
        Self::Unavailable {
            error: AuthorError::KeyError,
        }
    }

    pub fn not_found() -> Self {
        Self::Unavailable {
            error: AuthorError::NotFound,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known { .. })
    }
}
