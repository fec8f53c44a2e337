pub mod signature_algorithms;
pub mod upload_credentials;
pub mod videos;
