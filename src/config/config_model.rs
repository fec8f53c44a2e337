use crate::infrastructure::cloudinary::upload_signer::CloudinaryConfig;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub database: Database,
    pub cloudinary: CloudinaryConfig,
    pub cors: Cors,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    pub body_limit_bytes: usize,
    /// Seconds.
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct Cors {
    pub allowed_origins: Vec<String>,
}
