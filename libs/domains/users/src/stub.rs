use async_trait::async_trait;

use crate::error::{UserError, UserResult};
use crate::models::{UpdateUser, User};
use crate::repository::UserRepository;

/// Placeholder implementation of [`UserRepository`].
///
/// No persistence backend exists yet; every method answers with
/// [`UserError::Unimplemented`], which the HTTP layer surfaces as a 500.
/// The HTTP contract is exercised against mocked repositories in tests, and
/// a deployment is expected to replace this with a real store.
#[derive(Debug, Default, Clone)]
pub struct StubUserRepository;

impl StubUserRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserRepository for StubUserRepository {
    async fn get_by_id(&self, _id: i32) -> UserResult<Option<User>> {
        Err(UserError::Unimplemented("get_by_id"))
    }

    async fn create(&self, _user: User) -> UserResult<User> {
        Err(UserError::Unimplemented("create"))
    }

    async fn update(&self, _user: User) -> UserResult<bool> {
        Err(UserError::Unimplemented("update"))
    }

    async fn partial_update(&self, _id: i32, _input: UpdateUser) -> UserResult<bool> {
        Err(UserError::Unimplemented("partial_update"))
    }

    async fn delete_by_id(&self, _id: i32) -> UserResult<bool> {
        Err(UserError::Unimplemented("delete_by_id"))
    }
}
