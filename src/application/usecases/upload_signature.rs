use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

use crate::domain::{
    errors::ServiceError, repositories::upload_signer::UploadSigner,
    value_objects::upload_credentials::UploadCredential,
};

pub struct UploadSignatureUseCase<S>
where
    S: UploadSigner + Send + Sync + 'static,
{
    upload_signer: Arc<S>,
}

impl<S> UploadSignatureUseCase<S>
where
    S: UploadSigner + Send + Sync + 'static,
{
    pub fn new(upload_signer: Arc<S>) -> Self {
        Self { upload_signer }
    }

    pub fn issue(&self) -> Result<UploadCredential, ServiceError> {
        let timestamp = Utc::now().timestamp();
        let credential = self.upload_signer.sign_upload(timestamp)?;

        debug!(
            timestamp,
            folder = %credential.folder,
            "upload_signature: credential issued"
        );

        Ok(credential)
    }
}
