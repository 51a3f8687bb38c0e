//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{ErrorCode, ErrorResponse};
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the request body, then validates it with the `validator`
/// crate's `Validate` trait. Both failure modes produce a 400 with a
/// structured [`ErrorResponse`] body: a body that cannot be deserialized
/// (bad syntax, a field that fails its semantic type such as a malformed
/// date) never reaches the handler.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[validate(length(min = 1, max = 100))]
///     first_name: String,
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {}", payload.first_name)
/// }
///
/// let app = Router::new().route("/users", post(create_user));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            let error_response = ErrorResponse {
                code: ErrorCode::JsonExtraction.code(),
                error: ErrorCode::JsonExtraction.as_str().to_string(),
                message: e.body_text(),
                details: None,
            };

            (StatusCode::BAD_REQUEST, axum::Json(error_response)).into_response()
        })?;

        data.validate().map_err(|e| {
            // Convert validator errors to structured JSON
            let details = e
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_messages: Vec<serde_json::Value> = errors
                        .iter()
                        .map(|err| {
                            serde_json::json!({
                                "code": err.code,
                                "message": err.message,
                                "params": err.params,
                            })
                        })
                        .collect();
                    (field.to_string(), serde_json::json!(error_messages))
                })
                .collect::<serde_json::Map<_, _>>();

            let error_response = ErrorResponse {
                code: ErrorCode::ValidationError.code(),
                error: ErrorCode::ValidationError.as_str().to_string(),
                message: "Request validation failed".to_string(),
                details: Some(serde_json::Value::Object(details)),
            };

            (StatusCode::BAD_REQUEST, axum::Json(error_response)).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1))]
        name: String,
    }

    fn json_request(body: &str) -> Request {
        HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let req = json_request(r#"{"name":"Ada"}"#);
        let ValidatedJson(payload) = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(payload.name, "Ada");
    }

    #[tokio::test]
    async fn test_malformed_json_rejected_with_400() {
        let req = json_request(r#"{"name":"#);
        let rejection = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_field_type_rejected_with_400() {
        let req = json_request(r#"{"name":42}"#);
        let rejection = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_validation_failure_rejected_with_400() {
        let req = json_request(r#"{"name":""}"#);
        let rejection = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }
}
