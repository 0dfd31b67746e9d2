//! Post Context - Entities
//!
//! 全部是请求范围内的上游数据投影，没有本地身份

use super::Author;

/// 列表中的帖子（已合并作者）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author: Author,
}

/// 帖子评论，只保留 id 与 body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub body: String,
}

/// 帖子详情（作者 + 评论）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author: Author,
    pub comments: Vec<Comment>,
}

/// 上游创建帖子后的回显
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPost {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub body: String,
}

/// 上游更新帖子后的回显（不含作者）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedPost {
    pub id: i64,
    pub title: String,
    pub body: String,
}
