//! Post Repository
//!
//! 聚合 posts / comments / users 三个上游资源：
//! - list_posts: 帖子列表 + 作者
//! - post_details: 单个帖子 + 评论 + 作者
//! - create_post / update_post: 透传上游并解码回显

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    CreatePostPayload, PlaceholderApiPort, RawComment, RawPost, RawUser, UpdatePostPayload,
};
use crate::domain::decode::require;
use crate::domain::{Author, Comment, CreatedPost, DecodeError, Post, PostDetail, UpdatedPost};

const POST: &str = "Post";
const COMMENT: &str = "Comment";

/// 帖子仓储
///
/// 上游调用按顺序逐个 await，不做并发
#[derive(Clone)]
pub struct PostRepository {
    api: Arc<dyn PlaceholderApiPort>,
}

impl PostRepository {
    pub fn new(api: Arc<dyn PlaceholderApiPort>) -> Self {
        Self { api }
    }

    /// 帖子列表，每个帖子附带作者
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApplicationError> {
        let raw_posts = self.api.list_posts().await?;
        let raw_users = self.api.list_users().await?;

        tracing::debug!(
            posts = raw_posts.len(),
            users = raw_users.len(),
            "Merging posts with authors"
        );

        let posts = raw_posts
            .into_iter()
            .map(|raw| convert_post(raw, &raw_users))
            .collect::<Result<Vec<_>, _>>()?;

        let unresolved = posts.iter().filter(|p| !p.author.is_known()).count();
        if unresolved > 0 {
            tracing::warn!(unresolved, "Some posts have no resolvable author");
        }

        Ok(posts)
    }

    /// 创建帖子，上游回显原样解码
    pub async fn create_post(
        &self,
        payload: CreatePostPayload,
    ) -> Result<CreatedPost, ApplicationError> {
        let raw = self.api.create_post(&payload).await?;
        let created = convert_created_post(raw)?;

        tracing::info!(post_id = created.id, author_id = created.author_id, "Post created");

        Ok(created)
    }

    /// 帖子详情：帖子 -> 评论 -> 用户，依次请求后合并
    ///
    /// 不预先检查帖子是否存在：帖子请求失败时评论和用户仍会请求，三次调用结束后再返回帖子的错误
    pub async fn post_details(&self, post_id: i64) -> Result<PostDetail, ApplicationError> {
        let raw_post = self.api.get_post(post_id).await;
        let raw_comments = self.api.list_comments(post_id).await?;
        let raw_users = self.api.list_users().await?;
        let raw_post = raw_post?;

        let comments = raw_comments
            .into_iter()
            .map(convert_comment)
            .collect::<Result<Vec<_>, _>>()?;
        let post = convert_post(raw_post, &raw_users)?;

        Ok(PostDetail {
            id: post.id,
            title: post.title,
            body: post.body,
            author: post.author,
            comments,
        })
    }

    /// 更新帖子，上游回显原样解码
    pub async fn update_post(
        &self,
        post_id: i64,
        payload: UpdatePostPayload,
    ) -> Result<UpdatedPost, ApplicationError> {
        let raw = self.api.update_post(post_id, &payload).await?;
        let updated = convert_updated_post(raw)?;

        tracing::info!(post_id = updated.id, "Post updated");

        Ok(updated)
    }
}

/// 按 userId 在用户列表中查找作者
///
/// 线性扫描全部用户，后出现的匹配覆盖先前的匹配。
/// 匹配到的用户缺少 name 或 email 时整体替换为 KeyError，没有匹配时为 NotFound。
pub fn merge_author(user_id: i64, users: &[RawUser]) -> Author {
    let mut author = Author::not_found();

    for user in users.iter().filter(|u| u.id == Some(user_id)) {
        author = match (&user.name, &user.email) {
            (Some(name), Some(email)) => Author::known(user_id, name.clone(), email.clone()),
            _ => Author::key_error(),
        };
    }

    author
}

fn convert_post(raw: RawPost, users: &[RawUser]) -> Result<Post, DecodeError> {
    let user_id = require(raw.user_id, POST, "userId")?;

    Ok(Post {
        id: require(raw.id, POST, "id")?,
        title: require(raw.title, POST, "title")?,
        body: require(raw.body, POST, "body")?,
        author: merge_author(user_id, users),
    })
}

fn convert_comment(raw: RawComment) -> Result<Comment, DecodeError> {
    Ok(Comment {
        id: require(raw.id, COMMENT, "id")?,
        body: require(raw.body, COMMENT, "body")?,
    })
}

fn convert_created_post(raw: RawPost) -> Result<CreatedPost, DecodeError> {
    Ok(CreatedPost {
        id: require(raw.id, POST, "id")?,
        author_id: require(raw.author_id, POST, "author_id")?,
        title: require(raw.title, POST, "title")?,
        body: require(raw.body, POST, "body")?,
    })
}

fn convert_updated_post(raw: RawPost) -> Result<UpdatedPost, DecodeError> {
    Ok(UpdatedPost {
        id: require(raw.id, POST, "id")?,
        title: require(raw.title, POST, "title")?,
        body: require(raw.body, POST, "body")?,
    })
}
