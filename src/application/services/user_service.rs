//! User creation, retrieval, and removal service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for managing the user collection.
///
/// Translates repository absence into the client-addressable Not-Found
/// condition; everything else passes through unchanged.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all users in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Persists a new user and returns the stored record with its assigned
    /// identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        self.repository.create(new_user).await
    }

    /// Retrieves a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has the given identifier.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }

    /// Removes a user by identifier.
    ///
    /// Deleting an identifier that does not exist is an error, consistent
    /// with [`Self::get_user`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user had the given identifier.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(AppError::not_found("User not found", json!({ "id": id })));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use serde_json::Map;

    fn create_test_user(id: i64, name: &str) -> User {
        User::new(id, name.to_string(), Map::new())
    }

    #[tokio::test]
    async fn test_list_users() {
        let mut mock_repo = MockUserRepository::new();

        let users = vec![
            create_test_user(1, "Alice"),
            create_test_user(2, "Bob"),
        ];
        mock_repo
            .expect_list()
            .times(1)
            .returning(move || Ok(users.clone()));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.list_users().await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Alice");
        assert_eq!(result[1].name, "Bob");
    }

    #[tokio::test]
    async fn test_create_user_returns_assigned_id() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_create()
            .times(1)
            .returning(|new_user| Ok(User::new(1, new_user.name, new_user.attributes)));

        let service = UserService::new(Arc::new(mock_repo));

        let user = service
            .create_user(NewUser {
                name: "Alice".to_string(),
                attributes: Map::new(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Alice");
    }

    #[tokio::test]
    async fn test_get_user_found() {
        let mut mock_repo = MockUserRepository::new();

        let user = create_test_user(7, "Alice");
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_user(7).await.unwrap();

        assert_eq!(result.id, 7);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.get_user(404).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(true));

        let service = UserService::new(Arc::new(mock_repo));

        assert!(service.delete_user(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = UserService::new(Arc::new(mock_repo));

        let result = service.delete_user(404).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
