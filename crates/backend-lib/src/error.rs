// crates/backend-lib/src/error.rs

//! Central error type + Axum integration.
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mergington_common::ErrorDetail;
use thiserror::Error;

/// Application error types with error codes
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadySignedUp,

    #[error("Student is not signed up for this activity")]
    NotSignedUp,

    #[error("Invalid query: {}", .0.body_text())]
    InvalidQuery(#[from] QueryRejection),

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ActivityNotFound | AppError::NotSignedUp => StatusCode::NOT_FOUND,
            AppError::AlreadySignedUp | AppError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidSeed(_) | AppError::Io(_) | AppError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ActivityNotFound => "ACT_001",
            AppError::AlreadySignedUp => "SIGNUP_001",
            AppError::NotSignedUp => "SIGNUP_002",
            AppError::InvalidQuery(_) => "VAL_001",
            AppError::InvalidSeed(_) => "SEED_001",
            AppError::Io(_) => "IO_001",
            AppError::Json(_) => "JSON_001",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }

        let body = ErrorDetail {
            detail: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}
