//! User Repository
//!
//! 列出与创建用户，不做任何合并

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CreateUserPayload, PlaceholderApiPort, RawUser};
use crate::domain::decode::require;
use crate::domain::{DecodeError, Email, User};

const USER: &str = "User";

/// 用户仓储
#[derive(Clone)]
pub struct UserRepository {
    api: Arc<dyn PlaceholderApiPort>,
}

impl UserRepository {
    pub fn new(api: Arc<dyn PlaceholderApiPort>) -> Self {
        Self { api }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApplicationError> {
        let raw_users = self.api.list_users().await?;

        let users = raw_users
            .into_iter()
            .map(convert_user)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(users)
    }

    pub async fn create_user(&self, payload: CreateUserPayload) -> Result<User, ApplicationError> {
        let raw = self.api.create_user(&payload).await?;
        let user = convert_user(raw)?;

        tracing::info!(user_id = user.id, username = %user.username, "User created");

        Ok(user)
    }
}

fn convert_user(raw: RawUser) -> Result<User, DecodeError> {
    let email = require(raw.email, USER, "email")?;
    let email = Email::parse(email).map_err(|e| DecodeError::InvalidField {
        entity: USER,
        field: "email",
        reason: e.to_string(),
    })?;

    Ok(User {
        id: require(raw.id, USER, "id")?,
        name: require(raw.name, USER, "name")?,
        username: require(raw.username, USER, "username")?,
        email,
        phone: require(raw.phone, USER, "phone")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::InMemoryPlaceholderClient;

    fn repository(
        client: InMemoryPlaceholderClient,
    ) -> (UserRepository, Arc<InMemoryPlaceholderClient>) {
        let client = Arc::new(client);
        (UserRepository::new(client.clone()), client)
    }

    #[tokio::test]
    async fn test_list_users_decodes_every_record() {
        let (repo, client) = repository(InMemoryPlaceholderClient::seeded());

        let users = repo.list_users().await.unwrap();

        assert!(!users.is_empty());
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].email.as_str(), "Sincere@april.biz");
        assert_eq!(client.calls(), vec!["GET /users"]);
    }

    #[tokio::test]
    async fn test_list_users_missing_phone_fails_decode() {
        let (repo, _) = repository(InMemoryPlaceholderClient::new().with_users(vec![RawUser {
            id: Some(1),
            name: Some("Leanne".to_string()),
            username: Some("Bret".to_string()),
            email: Some("Sincere@april.biz".to_string()),
            phone: None,
        }]));

        let err = repo.list_users().await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Decode(DecodeError::MissingField { entity: "User", field: "phone" })
        ));
    }

    #[tokio::test]
    async fn test_list_users_invalid_upstream_email_fails_decode() {
        let (repo, _) = repository(InMemoryPlaceholderClient::new().with_users(vec![RawUser {
            id: Some(1),
            name: Some("Leanne".to_string()),
            username: Some("Bret".to_string()),
            email: Some("nope".to_string()),
            phone: Some("1".to_string()),
        }]));

        let err = repo.list_users().await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Decode(DecodeError::InvalidField { field: "email", .. })
        ));
    }

    #[tokio::test]
    async fn test_create_user_returns_upstream_echo() {
        let (repo, client) = repository(InMemoryPlaceholderClient::seeded());

        let user = repo
            .create_user(CreateUserPayload {
                name: "laskdj".to_string(),
                username: "test".to_string(),
                email: "email@example.com".to_string(),
                phone: "alskdjflasdkfj".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(user.username, "test");
        assert_eq!(user.email.as_str(), "email@example.com");
        assert!(user.id > 0);
        assert_eq!(client.calls(), vec!["POST /users"]);
    }
}
