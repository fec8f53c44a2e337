use axum::{http::StatusCode, response::IntoResponse};
use tracing::info;

use super::error_responses::AppError;

pub const LIVENESS_MESSAGE: &str = "Backend is running ✅";

pub async fn not_found() -> impl IntoResponse {
    info!("router: not_found handler invoked");
    AppError::NotFound
}

pub async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, LIVENESS_MESSAGE)
}
