use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::{UpdateUser, User};

/// Repository trait for User persistence
///
/// This trait defines the data access interface for users. Implementations
/// can use different storage backends; see [`crate::stub::StubUserRepository`]
/// for the placeholder shipped with this crate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by ID
    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>>;

    /// Create a new user, assigning its identifier
    async fn create(&self, user: User) -> UserResult<User>;

    /// Replace an existing user; returns true if a matching record existed
    async fn update(&self, user: User) -> UserResult<bool>;

    /// Merge the supplied fields into an existing user; returns true if a
    /// matching record existed
    async fn partial_update(&self, id: i32, input: UpdateUser) -> UserResult<bool>;

    /// Delete a user by ID; returns true if a matching record existed
    async fn delete_by_id(&self, id: i32) -> UserResult<bool>;
}
