use anyhow::Result;
use axum::{
    Router,
    middleware,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{
    application::usecases::{upload_signature::UploadSignatureUseCase, videos::VideosUseCase},
    config::config_model::DotEnvyConfig,
    domain::repositories::{upload_signer::UploadSigner, videos::VideoRepository},
    infrastructure::{
        axum_http::{default_routers, error_responses, routers},
        cloudinary::upload_signer::CloudinaryUploadSigner,
        postgres::{postgres_connection::PgPoolSquad, repositories::videos::VideoPostgres},
    },
};

pub async fn start(config: Arc<DotEnvyConfig>, db_pool: Arc<PgPoolSquad>) -> Result<()> {
    let video_repository = VideoPostgres::new(Arc::clone(&db_pool));
    let videos_usecase = VideosUseCase::new(Arc::new(video_repository));

    let upload_signer = CloudinaryUploadSigner::new(config.cloudinary.clone());
    let upload_signature_usecase = UploadSignatureUseCase::new(Arc::new(upload_signer));

    let app = build_router(
        &config,
        Arc::new(videos_usecase),
        Arc::new(upload_signature_usecase),
    )?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server is running on port {}", config.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

pub fn build_router<V, S>(
    config: &DotEnvyConfig,
    videos_usecase: Arc<VideosUseCase<V>>,
    upload_signature_usecase: Arc<UploadSignatureUseCase<S>>,
) -> Result<Router>
where
    V: VideoRepository + Send + Sync + 'static,
    S: UploadSigner + Send + Sync + 'static,
{
    let app = Router::new()
        .fallback(default_routers::not_found)
        .route("/", get(default_routers::liveness))
        .merge(routers::upload_signature::routes(upload_signature_usecase))
        .merge(routers::videos::routes(videos_usecase))
        .layer(TimeoutLayer::new(Duration::from_secs(config.server.timeout)))
        .layer(RequestBodyLimitLayer::new(config.server.body_limit_bytes))
        .layer(middleware::map_response(
            error_responses::json_middleware_errors,
        ))
        .layer(cors_layer(&config.cors.allowed_origins))
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            if origin == "*" {
                warn!("wildcard CORS origin ignored; list origins explicitly");
                return None;
            }
            match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!(%origin, error = %err, "invalid CORS origin ignored");
                    None
                }
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_origin(origins)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM signal handler");
        sigterm.recv().await;
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
