use thiserror::Error;

/// Every failure a use case can surface to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("dependency unavailable: {0:#}")]
    DependencyUnavailable(#[source] anyhow::Error),

    #[error("validation failed: {0}")]
    Validation(String),
}
