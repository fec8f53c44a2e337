pub mod upload_signature;
pub mod videos;
