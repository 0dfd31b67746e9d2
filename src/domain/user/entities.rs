//! User Context - Entities

use super::Email;

/// 用户
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: Email,
    pub phone: String,
}
