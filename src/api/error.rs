//! Mapping of domain failures onto HTTP responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::domain::DomainError;

/// Handler error wrapping a [`DomainError`]
#[derive(Debug)]
pub struct ApiError(pub DomainError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        match self.0 {
            DomainError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            DomainError::Validation(_) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            DomainError::Store(_) => {
                tracing::error!("{}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}

/// Confirmation body for mutations, e.g. `{"message": "Story successfully removed"}`
pub fn confirmation(message: impl Into<String>) -> Json<Value> {
    Json(json!({ "message": message.into() }))
}
