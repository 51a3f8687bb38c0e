use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Could not generate location URI: {0}")]
    Location(String),

    #[error("Operation not implemented: {0}")]
    Unimplemented(&'static str),

    #[error("Database error: {0}")]
    Database(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Convert UserError to AppError for standardized error responses
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User {} not found", id)),
            UserError::Validation(msg) => AppError::BadRequest(msg),
            UserError::Location(uri) => {
                AppError::InternalServerError(format!("Could not generate location URI: {}", uri))
            }
            UserError::Unimplemented(op) => {
                AppError::InternalServerError(format!("{} is not implemented", op))
            }
            UserError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            // Lookups against a nonexistent id answer with a bare 404, no body
            UserError::NotFound(id) => {
                tracing::info!(user_id = id, "user not found");
                StatusCode::NOT_FOUND.into_response()
            }
            other => AppError::from(other).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_bare_404() {
        let response = UserError::NotFound(9).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_is_400() {
        let response = UserError::Validation("bad input".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_location_failure_is_500() {
        let response = UserError::Location("\u{0}".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_unimplemented_is_500() {
        let response = UserError::Unimplemented("create").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
