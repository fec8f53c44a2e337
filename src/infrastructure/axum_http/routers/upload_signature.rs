use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use std::sync::Arc;
use tracing::{error, info};

use crate::{
    application::usecases::upload_signature::UploadSignatureUseCase,
    domain::repositories::upload_signer::UploadSigner,
    infrastructure::axum_http::error_responses::AppError,
};

pub fn routes<S>(usecase: Arc<UploadSignatureUseCase<S>>) -> Router
where
    S: UploadSigner + Send + Sync + 'static,
{
    Router::new()
        .route("/get-upload-signature", get(get_upload_signature::<S>))
        .with_state(usecase)
}

pub async fn get_upload_signature<S>(
    State(usecase): State<Arc<UploadSignatureUseCase<S>>>,
) -> impl IntoResponse
where
    S: UploadSigner + Send + Sync + 'static,
{
    info!("upload_signature: request received");

    match usecase.issue() {
        Ok(credential) => Json(credential).into_response(),
        Err(err) => {
            error!(error = %err, "upload_signature: failed to sign upload");
            AppError::from_service_error(err, "Failed to sign upload").into_response()
        }
    }
}
