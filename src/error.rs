use crate::domain::ValidationError;
use crate::finance::FinanceError;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Internal server error: {0}")]
    Internal(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Unprocessable: {0}")]
    Unprocessable(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<FinanceError> for AppError {
    fn from(err: FinanceError) -> Self {
        match err {
            FinanceError::InvalidInput { .. } | FinanceError::InvalidTerm { .. } => {
                AppError::BadRequest(err.to_string())
            }
            FinanceError::Unaffordable { .. } => AppError::Unprocessable(err.to_string()),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(err: QueryRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finance_errors_map_to_status() {
        let bad: AppError = FinanceError::InvalidTerm { term_months: 0 }.into();
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);

        let unaffordable: AppError = FinanceError::Unaffordable { capacity: -200.0 }.into();
        assert_eq!(
            unaffordable.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err: AppError = ValidationError::new("zip", "must be exactly 5 digits").into();
        match &err {
            AppError::BadRequest(msg) => assert!(msg.contains("zip")),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_status() {
        let err = AppError::NotFound("vehicle x".into());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
