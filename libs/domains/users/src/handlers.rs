use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_helpers::{ErrorResponse, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{UserError, UserResult};
use crate::models::{UpdateUser, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Public mount point of the users API; also the prefix of Location headers
/// emitted for newly created users.
pub const USERS_API_PATH: &str = "/api/users";

/// Responses that carry a user body always declare an explicit charset.
const JSON_UTF8: &str = "application/json; charset=utf-8";

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_user,
        update_or_create_user,
        get_user,
        partial_update_user,
        delete_user,
    ),
    components(schemas(User, UpdateUser, ErrorResponse)),
    tags(
        (name = "Users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", post(create_user).put(update_or_create_user))
        .route(
            "/{id}",
            get(get_user).patch(partial_update_user).delete(delete_user),
        )
        .with_state(shared_service)
}

/// 201 with the persisted user and a Location header pointing at it.
fn created(user: User) -> UserResult<Response> {
    let location = HeaderValue::from_str(&format!("{USERS_API_PATH}/{}", user.user_id))
        .map_err(|e| UserError::Location(e.to_string()))?;

    let mut response = (
        StatusCode::CREATED,
        [(header::CONTENT_TYPE, JSON_UTF8)],
        Json(user),
    )
        .into_response();
    response.headers_mut().insert(header::LOCATION, location);
    Ok(response)
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "No user with the given ID"),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<i32>,
) -> UserResult<Response> {
    let user = service.get_user(id).await?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, JSON_UTF8)], Json(user)).into_response())
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = User,
    responses(
        (status = 201, description = "User created successfully", body = User,
            headers(("Location" = String, description = "URI of the created user"))),
        (status = 400, description = "Malformed or invalid payload", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<User>,
) -> UserResult<Response> {
    let user = service.create_user(input).await?;
    created(user)
}

/// Update a user, or create one when the payload carries no ID
#[utoipa::path(
    put,
    path = "",
    tag = "Users",
    request_body = User,
    responses(
        (status = 202, description = "User updated successfully"),
        (status = 201, description = "User created successfully", body = User,
            headers(("Location" = String, description = "URI of the created user"))),
        (status = 400, description = "Malformed or invalid payload", body = ErrorResponse),
        (status = 404, description = "No user with the given ID"),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn update_or_create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<User>,
) -> UserResult<Response> {
    // A positive ID selects the update path; anything else falls through to
    // creation, mirroring POST.
    if input.user_id > 0 {
        service.update_user(input).await?;
        Ok(StatusCode::ACCEPTED.into_response())
    } else {
        let user = service.create_user(input).await?;
        created(user)
    }
}

/// Partially update a user
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 202, description = "User updated successfully"),
        (status = 400, description = "Malformed or invalid payload", body = ErrorResponse),
        (status = 404, description = "No user with the given ID"),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn partial_update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<i32>,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> UserResult<StatusCode> {
    service.partial_update_user(id, input).await?;
    Ok(StatusCode::ACCEPTED)
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 202, description = "User deleted successfully"),
        (status = 404, description = "No user with the given ID"),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<i32>,
) -> UserResult<StatusCode> {
    service.delete_user(id).await?;
    Ok(StatusCode::ACCEPTED)
}
