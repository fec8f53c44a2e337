use mockall::automock;

use crate::domain::{errors::ServiceError, value_objects::upload_credentials::UploadCredential};

/// Produces signed direct-upload parameters for the media host.
#[automock]
pub trait UploadSigner {
    fn sign_upload(&self, timestamp: i64) -> Result<UploadCredential, ServiceError>;
}
