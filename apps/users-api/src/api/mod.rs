//! API routes module

use axum::Router;
use domain_users::{StubUserRepository, UserService, handlers};

/// Create all API routes
pub fn routes() -> Router {
    let repository = StubUserRepository::new();
    let service = UserService::new(repository);

    Router::new().nest("/users", handlers::router(service))
}
