pub mod upload_signer;
pub mod videos;
