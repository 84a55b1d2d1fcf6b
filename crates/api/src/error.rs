use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::services::{GatewayError, RegistrationError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ApiError::InvalidBody(msg) => (StatusCode::BAD_REQUEST, "invalid_body", msg.clone()),
            ApiError::InvalidEmail => (
                StatusCode::BAD_REQUEST,
                "invalid_email",
                self.to_string(),
            ),
            ApiError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                "duplicate_email",
                self.to_string(),
            ),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                )
            }
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::InvalidEmail => ApiError::InvalidEmail,
            RegistrationError::DuplicateEmail => ApiError::DuplicateEmail,
            RegistrationError::PersistenceFailure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_email_is_client_error() {
        let response = ApiError::from(RegistrationError::InvalidEmail).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "invalid_email");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_client_error() {
        let response = ApiError::from(RegistrationError::DuplicateEmail).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "duplicate_email");
    }

    #[tokio::test]
    async fn test_persistence_failure_is_server_error_without_details() {
        let err = RegistrationError::PersistenceFailure("connection reset".to_string());
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "An internal error occurred");
    }

    #[test]
    fn test_invalid_body_status() {
        let response = ApiError::InvalidBody("expected value".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_gateway_error_is_internal() {
        let err: ApiError = GatewayError::Storage("down".to_string()).into();
        assert!(matches!(err, ApiError::Internal(msg) if msg.contains("down")));
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(ApiError::InvalidEmail.to_string(), "Invalid email format");
        assert_eq!(ApiError::DuplicateEmail.to_string(), "Email already registered");
        assert_eq!(
            ApiError::Internal("x".to_string()).to_string(),
            "Internal error: x"
        );
    }
}
