pub mod upload_signer;
