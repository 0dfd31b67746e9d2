//! Data Transfer Objects
//!
//! 请求参数与响应结构，即对外声明的 schema

use serde::{Deserialize, Serialize};

use crate::application::ports::{CreatePostPayload, CreateUserPayload, UpdatePostPayload};
use crate::domain::{Author, Comment, CreatedPost, Email, Post, PostDetail, UpdatedPost, User};

// ============================================================================
// Post DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub author_id: i64,
    pub title: String,
    pub body: String,
}

impl From<CreatePostRequest> for CreatePostPayload {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            author_id: req.author_id,
            title: req.title,
            body: req.body,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub body: String,
}

impl From<UpdatePostRequest> for UpdatePostPayload {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            title: req.title,
            body: req.body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author: Author,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            author: post.author,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub body: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            body: comment.body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author: Author,
    pub comments: Vec<CommentResponse>,
}

impl From<PostDetail> for PostDetailResponse {
    fn from(detail: PostDetail) -> Self {
        Self {
            id: detail.id,
            title: detail.title,
            body: detail.body,
            author: detail.author,
            comments: detail.comments.into_iter().map(CommentResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedPostResponse {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub body: String,
}

impl From<CreatedPost> for CreatedPostResponse {
    fn from(post: CreatedPost) -> Self {
        Self {
            id: post.id,
            author_id: post.author_id,
            title: post.title,
            body: post.body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdatedPostResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl From<UpdatedPost> for UpdatedPostResponse {
    fn from(post: UpdatedPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
        }
    }
}

// ============================================================================
// User DTOs
// ============================================================================

/// 邮箱在反序列化阶段校验，格式错误与缺字段一样返回 422
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub username: String,
    pub email: Email,
    pub phone: String,
}

impl From<CreateUserRequest> for CreateUserPayload {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            name: req.name,
            username: req.username,
            email: req.email.into_inner(),
            phone: req.phone,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: Email,
    pub phone: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            username: user.username,
            email: user.email,
            phone: user.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_post_request_rejects_wrong_types() {
        let result = serde_json::from_value::<CreatePostRequest>(json!({
            "author_id": "aasdf", "title": 1, "body": "qwer"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_update_post_request_rejects_misspelled_key() {
        let data = json!({"titl": "asdf", "body": "qwer"});
        let err = serde_json::from_value::<UpdatePostRequest>(data).unwrap_err();
        assert!(err.to_string().contains("missing field `title`"));
    }

    #[test]
    fn test_post_detail_response_comments_have_only_id_and_body() {
        let detail = PostDetail {
            id: 1,
            title: "t".to_string(),
            body: "b".to_string(),
            author: Author::known(1, "Leanne", "l@april.biz"),
            comments: vec![Comment {
                id: 9,
                body: "c".to_string(),
            }],
        };

        let value = serde_json::to_value(PostDetailResponse::from(detail)).unwrap();
        assert_eq!(value["comments"], json!([{"id": 9, "body": "c"}]));
        assert_eq!(value["author"], json!({"id": 1, "name": "Leanne", "email": "l@april.biz"}));
    }
}
