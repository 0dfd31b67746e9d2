//! Post Context

mod author;
mod entities;

pub use author::{Author, AuthorError};
pub use entities::{Comment, CreatedPost, Post, PostDetail, UpdatedPost};
