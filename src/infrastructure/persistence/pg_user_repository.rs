//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;

use super::gateway::PgGateway;
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for user storage and retrieval.
///
/// Composed on [`PgGateway`]: each operation opens one unit of work, runs
/// against it, and commits on normal return. An early return via `?` drops
/// the transaction, which rolls back.
pub struct PgUserRepository {
    gateway: PgGateway,
}

impl PgUserRepository {
    /// Creates a new repository backed by the given gateway.
    pub fn new(gateway: PgGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut uow = self.gateway.begin().await?;

        let user = self.gateway.save::<User>(&mut uow, new_user).await?;

        uow.commit().await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let mut uow = self.gateway.begin().await?;

        let found = self.gateway.find_by_id::<User>(&mut uow, id).await?;

        uow.commit().await?;
        Ok(found)
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let mut uow = self.gateway.begin().await?;

        let users =
            sqlx::query_as::<_, User>("SELECT id, name, attributes FROM users ORDER BY id")
                .fetch_all(&mut *uow)
                .await?;

        uow.commit().await?;
        Ok(users)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut uow = self.gateway.begin().await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *uow)
            .await?;

        uow.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
