use anyhow::{Context, Result};
use tracing::warn;

use super::config_model::{Cors, Database, DotEnvyConfig, Server};
use crate::{
    domain::value_objects::signature_algorithms::SignatureAlgorithm,
    infrastructure::cloudinary::upload_signer::{CloudinaryConfig, DEFAULT_UPLOAD_FOLDER},
};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BODY_LIMIT_MB: u64 = 1;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Origins that always receive CORS headers, on top of `FRONTEND_URL`.
pub const BUILTIN_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:9002",
    "https://traffic-flow-ttpx.vercel.app",
];

/// Reads the process environment; `.env` is loaded by `run` beforehand.
pub fn load() -> Result<DotEnvyConfig> {
    load_from(|key| std::env::var(key).ok())
}

pub fn load_from<F>(env: F) -> Result<DotEnvyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let server = Server {
        port: parse_or(var("PORT"), "PORT", DEFAULT_PORT)?,
        body_limit_bytes: body_limit_bytes(parse_or(
            var("SERVER_BODY_LIMIT"),
            "SERVER_BODY_LIMIT",
            DEFAULT_BODY_LIMIT_MB,
        )?)?,
        timeout: parse_or(var("SERVER_TIMEOUT"), "SERVER_TIMEOUT", DEFAULT_TIMEOUT_SECS)?,
    };

    let database = Database {
        url: var("DATABASE_URL").context("DATABASE_URL is invalid")?,
    };

    let signature_algorithm = match var("CLOUDINARY_SIGNATURE_ALGORITHM") {
        Some(raw) => raw
            .parse::<SignatureAlgorithm>()
            .map_err(anyhow::Error::msg)
            .context("CLOUDINARY_SIGNATURE_ALGORITHM is invalid")?,
        None => SignatureAlgorithm::default(),
    };

    let cloudinary = CloudinaryConfig {
        cloud_name: var("CLOUDINARY_CLOUD_NAME"),
        api_key: var("CLOUDINARY_API_KEY"),
        api_secret: var("CLOUDINARY_API_SECRET"),
        upload_folder: var("CLOUDINARY_UPLOAD_FOLDER")
            .unwrap_or_else(|| DEFAULT_UPLOAD_FOLDER.to_string()),
        signature_algorithm,
    };

    let missing = cloudinary.missing_variables();
    if !missing.is_empty() {
        warn!(
            missing = %missing.join(", "),
            "Cloudinary is not fully configured; upload signatures will fail"
        );
    }

    let mut allowed_origins = Vec::with_capacity(BUILTIN_ALLOWED_ORIGINS.len() + 1);
    match var("FRONTEND_URL") {
        Some(frontend_url) => allowed_origins.push(frontend_url.trim_end_matches('/').to_string()),
        None => warn!("FRONTEND_URL is not set; only built-in origins are allowed"),
    }
    allowed_origins.extend(BUILTIN_ALLOWED_ORIGINS.iter().map(|origin| origin.to_string()));

    Ok(DotEnvyConfig {
        server,
        database,
        cloudinary,
        cors: Cors { allowed_origins },
    })
}

/// `SERVER_BODY_LIMIT` is given in megabytes.
fn body_limit_bytes(megabytes: u64) -> Result<usize> {
    megabytes
        .checked_mul(1024 * 1024)
        .and_then(|bytes| usize::try_from(bytes).ok())
        .context("SERVER_BODY_LIMIT is too large")
}

fn parse_or<T>(raw: Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw.parse().with_context(|| format!("{} is invalid", key)),
        None => Ok(default),
    }
}
