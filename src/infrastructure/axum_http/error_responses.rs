use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::errors::ServiceError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Upload signing is not configured")]
    NotConfigured,

    #[error("{0}")]
    DependencyUnavailable(&'static str),

    #[error("Not found")]
    NotFound,

    #[error("Request body is too large")]
    PayloadTooLarge,

    #[error("Request timed out")]
    RequestTimeout,
}

impl AppError {
    /// Maps a use case failure to its public form. `unavailable_message` is
    /// what the client sees when the store or another dependency failed.
    pub fn from_service_error(err: ServiceError, unavailable_message: &'static str) -> Self {
        match err {
            ServiceError::Validation(message) => AppError::BadRequest(message),
            ServiceError::Configuration(_) => AppError::NotConfigured,
            ServiceError::DependencyUnavailable(_) => {
                AppError::DependencyUnavailable(unavailable_message)
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotConfigured | AppError::DependencyUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge;
        }
        AppError::BadRequest(rejection.body_text())
    }
}

/// Replaces the plain-text bodies tower-http middleware emits for timeouts
/// and body limits with the JSON error shape.
pub async fn json_middleware_errors(response: Response) -> Response {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"));

    if is_json {
        return response;
    }

    match response.status() {
        StatusCode::REQUEST_TIMEOUT => AppError::RequestTimeout.into_response(),
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge.into_response(),
        _ => response,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
