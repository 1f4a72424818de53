use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kaizen_core::error::{self, ApiError, ValidationError};

/// Internal error type that converts to structured API responses
#[derive(Debug)]
pub enum AppError {
    /// Onboarding payload rejected by the core validator (400)
    Onboarding(ValidationError),
    /// Ad-hoc request validation error (400)
    Validation {
        message: String,
        field: Option<String>,
        received: Option<serde_json::Value>,
        docs_hint: Option<String>,
    },
    /// LLM provider returned a non-success status (502)
    Upstream { status: u16, body: String },
    /// Database error (500)
    Database(sqlx::Error),
    /// Internal error (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::now_v7().to_string();

        let (status, api_error) = match self {
            AppError::Onboarding(err) => {
                let field = err.violations().first().map(|v| v.path.clone());
                (
                    StatusCode::BAD_REQUEST,
                    ApiError {
                        error: error::codes::VALIDATION_FAILED.to_string(),
                        message: err.to_string(),
                        field,
                        received: None,
                        request_id,
                        docs_hint: Some(
                            "Send the complete onboarding questionnaire (v1.2.0): \
                             userProfile, goals, and timeFrequency are required."
                                .to_string(),
                        ),
                    },
                )
            }
            AppError::Validation {
                message,
                field,
                received,
                docs_hint,
            } => (
                StatusCode::BAD_REQUEST,
                ApiError {
                    error: error::codes::VALIDATION_FAILED.to_string(),
                    message,
                    field,
                    received,
                    request_id,
                    docs_hint,
                },
            ),
            AppError::Upstream { status, body } => (
                StatusCode::BAD_GATEWAY,
                ApiError {
                    error: error::codes::UPSTREAM_ERROR.to_string(),
                    message: format!("LLM provider returned {status}: {body}"),
                    field: None,
                    received: None,
                    request_id,
                    docs_hint: None,
                },
            ),
            AppError::Database(err) => {
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError {
                        error: error::codes::INTERNAL_ERROR.to_string(),
                        message: "An internal error occurred".to_string(),
                        field: None,
                        received: None,
                        request_id,
                        docs_hint: None,
                    },
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError {
                        error: error::codes::INTERNAL_ERROR.to_string(),
                        message: "An internal error occurred".to_string(),
                        field: None,
                        received: None,
                        request_id,
                        docs_hint: None,
                    },
                )
            }
        };

        (status, Json(api_error)).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Onboarding(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Internal(format!("LLM request failed: {err}"))
    }
}
