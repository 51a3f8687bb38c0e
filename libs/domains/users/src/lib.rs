//! Users Domain
//!
//! This module provides a complete domain implementation for managing users.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + stub implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, service::UserService, stub::StubUserRepository};
//!
//! let repository = StubUserRepository::new();
//! let service = UserService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod stub;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::{ApiDoc, USERS_API_PATH};
pub use models::{UpdateUser, User};
pub use repository::UserRepository;
pub use service::UserService;
pub use stub::StubUserRepository;
