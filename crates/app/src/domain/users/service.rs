//! Users service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::users::{
        data::NewUser,
        errors::UsersServiceError,
        records::{UserId, UserRecord},
        repository::PgUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgUsersService {
    db: Db,
    repository: PgUsersRepository,
}

impl PgUsersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
        }
    }
}

#[async_trait]
impl UsersService for PgUsersService {
    #[tracing::instrument(
        name = "users.service.create_user",
        skip(self, user),
        fields(username = %user.username),
        err
    )]
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        let user = NewUser {
            username: user.username.trim().to_string(),
            email: user.email.trim().to_string(),
        };

        if user.username.is_empty() || user.email.is_empty() {
            return Err(UsersServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin_transaction().await?;

        let record = self.repository.create_user(&mut tx, &user).await?;

        tx.commit().await?;

        info!(user_id = %record.id, "created user");

        Ok(record)
    }

    async fn get_user(&self, user: UserId) -> Result<UserRecord, UsersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(record)
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Register a user account.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    /// Retrieve a single user.
    async fn get_user(&self, user: UserId) -> Result<UserRecord, UsersServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{errors::ErrorKind, test::TestContext};

    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
        }
    }

    #[tokio::test]
    async fn create_user_returns_record() -> TestResult {
        let ctx = TestContext::new().await;

        let user = ctx.users.create_user(new_user("kicks")).await?;

        assert_eq!(user.username, "kicks");
        assert_eq!(user.email, "kicks@example.com");

        let fetched = ctx.users.get_user(user.id).await?;

        assert_eq!(fetched, user);

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_username_is_conflict() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.users.create_user(new_user("kicks")).await?;

        let result = ctx
            .users
            .create_user(NewUser {
                username: "kicks".to_string(),
                email: "other@example.com".to_string(),
            })
            .await;

        assert!(
            matches!(result, Err(UsersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );
        assert_eq!(result.err().map(|e| e.kind()), Some(ErrorKind::Conflict));

        Ok(())
    }

    #[tokio::test]
    async fn blank_username_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx.users.create_user(new_user("  ")).await;

        assert!(
            matches!(result, Err(UsersServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.users.get_user(UserId::from_i64(9_999)).await;

        assert!(
            matches!(result, Err(UsersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
