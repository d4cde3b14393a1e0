// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::store::StoreError;

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// Every error body has the same shape: `{"type": <kind>, "message": <text>}`.
/// Handlers construct these through the helpers below and never format error
/// strings themselves.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    Validation(String),

    // 403 Forbidden (covers both missing credentials and missing role)
    Forbidden(String),

    // 404 Not Found
    EntityNotFound { entity: &'static str, id: i64 },

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::EntityNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Error kind name, used as the `type` field of the response body
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "ValidationError",
            ApiError::Forbidden(_) => "AuthorizationError",
            ApiError::EntityNotFound { .. } => "EntityNotFoundException",
            ApiError::InternalServerError(_) => "InternalServerError",
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Forbidden(msg) => msg.clone(),
            ApiError::EntityNotFound { entity, id } => {
                format!("{} with id {} not found", entity, id)
            }
            ApiError::InternalServerError(msg) => msg.clone(),
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "type": self.error_type(),
            "message": self.message(),
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn entity_not_found(entity: &'static str, id: i64) -> Self {
        ApiError::EntityNotFound { entity, id }
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // Log the real error but return a generic message
        tracing::error!("Store error: {}", err);
        ApiError::internal_server_error("An error occurred while processing your request")
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_payload() {
        let err = ApiError::entity_not_found("AmusementPark", 7);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            err.to_json(),
            json!({
                "type": "EntityNotFoundException",
                "message": "AmusementPark with id 7 not found",
            })
        );
    }

    #[test]
    fn test_forbidden_payload() {
        let err = ApiError::forbidden("ADMIN role required");
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.to_json()["type"], "AuthorizationError");
    }

    #[test]
    fn test_validation_payload() {
        let err = ApiError::validation("missing field `name`");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_json()["type"], "ValidationError");
        assert_eq!(err.to_json()["message"], "missing field `name`");
    }
}
