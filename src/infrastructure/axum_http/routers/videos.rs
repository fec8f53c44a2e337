use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    application::usecases::videos::VideosUseCase,
    domain::{
        errors::ServiceError, repositories::videos::VideoRepository,
        value_objects::videos::SaveVideoModel,
    },
    infrastructure::axum_http::error_responses::AppError,
};

pub const SAVED_MESSAGE: &str = "Video metadata saved ✅";

#[derive(Debug, Serialize)]
pub struct SaveVideoResponse {
    pub message: &'static str,
}

pub fn routes<V>(usecase: Arc<VideosUseCase<V>>) -> Router
where
    V: VideoRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/save-video", post(save_video::<V>))
        .route("/videos", get(list_videos::<V>))
        .with_state(usecase)
}

pub async fn save_video<V>(
    State(usecase): State<Arc<VideosUseCase<V>>>,
    payload: Result<Json<SaveVideoModel>, JsonRejection>,
) -> impl IntoResponse
where
    V: VideoRepository + Send + Sync + 'static,
{
    info!("videos: save request received");

    let Json(save_video_model) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection.body_text(), "videos: rejected save body");
            return AppError::from(rejection).into_response();
        }
    };

    match usecase.save_video(save_video_model).await {
        Ok(_) => Json(SaveVideoResponse {
            message: SAVED_MESSAGE,
        })
        .into_response(),
        Err(ServiceError::Validation(message)) => {
            warn!(error = %message, "videos: invalid save body");
            AppError::BadRequest(message).into_response()
        }
        Err(err) => {
            error!(error = %err, "videos: failed to save video");
            AppError::from_service_error(err, "Failed to save video").into_response()
        }
    }
}

pub async fn list_videos<V>(State(usecase): State<Arc<VideosUseCase<V>>>) -> impl IntoResponse
where
    V: VideoRepository + Send + Sync + 'static,
{
    info!("videos: list request received");

    match usecase.list_videos().await {
        Ok(videos) => Json(videos).into_response(),
        Err(err) => {
            error!(error = %err, "videos: failed to list videos");
            AppError::from_service_error(err, "Failed to load videos").into_response()
        }
    }
}
