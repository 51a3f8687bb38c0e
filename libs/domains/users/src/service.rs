//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{UpdateUser, User};
use crate::repository::UserRepository;

/// User service providing business logic operations
///
/// The service layer handles validation, translates missing records into
/// [`UserError::NotFound`], and orchestrates repository operations.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i32) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Create a new user, returning it with its assigned identifier
    #[instrument(skip(self, input), fields(first_name = %input.first_name))]
    pub async fn create_user(&self, input: User) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Replace an existing user wholesale
    #[instrument(skip(self, input), fields(user_id = input.user_id))]
    pub async fn update_user(&self, input: User) -> UserResult<()> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let id = input.user_id;
        if self.repository.update(input).await? {
            Ok(())
        } else {
            Err(UserError::NotFound(id))
        }
    }

    /// Merge the supplied fields into an existing user
    #[instrument(skip(self, input))]
    pub async fn partial_update_user(&self, id: i32, input: UpdateUser) -> UserResult<()> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        if self.repository.partial_update(id, input).await? {
            Ok(())
        } else {
            Err(UserError::NotFound(id))
        }
    }

    /// Delete a user
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i32) -> UserResult<()> {
        if self.repository.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(UserError::NotFound(id))
        }
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    fn sample_user(id: i32) -> User {
        User {
            user_id: id,
            first_name: "Ada".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_get_user_returns_record() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .with(eq(3))
            .returning(|id| Ok(Some(sample_user(id))));

        let service = UserService::new(repo);
        let user = service.get_user(3).await.unwrap();
        assert_eq!(user.user_id, 3);
        assert_eq!(user.first_name, "Ada");
    }

    #[tokio::test]
    async fn test_get_user_maps_missing_record_to_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = UserService::new(repo);
        let err = service.get_user(42).await.unwrap_err();
        assert!(matches!(err, UserError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_create_user_assigns_id_via_repository() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().returning(|mut user| {
            user.user_id = 17;
            Ok(user)
        });

        let service = UserService::new(repo);
        let created = service.create_user(sample_user(0)).await.unwrap();
        assert_eq!(created.user_id, 17);
    }

    #[tokio::test]
    async fn test_create_user_rejects_empty_first_name() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().never();

        let service = UserService::new(repo);
        let input = User {
            first_name: String::new(),
            ..sample_user(0)
        };
        let err = service.create_user(input).await.unwrap_err();
        assert!(matches!(err, UserError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_user_succeeds_when_record_exists() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().returning(|_| Ok(true));

        let service = UserService::new(repo);
        assert!(service.update_user(sample_user(5)).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_user_maps_missing_record_to_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().returning(|_| Ok(false));

        let service = UserService::new(repo);
        let err = service.update_user(sample_user(5)).await.unwrap_err();
        assert!(matches!(err, UserError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_partial_update_user_passes_id_and_input_through() {
        let mut repo = MockUserRepository::new();
        repo.expect_partial_update()
            .with(eq(8), eq(UpdateUser::default()))
            .returning(|_, _| Ok(true));

        let service = UserService::new(repo);
        assert!(
            service
                .partial_update_user(8, UpdateUser::default())
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_delete_user_maps_missing_record_to_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete_by_id().with(eq(9)).returning(|_| Ok(false));

        let service = UserService::new(repo);
        let err = service.delete_user(9).await.unwrap_err();
        assert!(matches!(err, UserError::NotFound(9)));
    }
}
