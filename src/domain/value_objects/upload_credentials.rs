use serde::Serialize;

/// Parameters a browser needs to upload straight to the media host.
/// Never carries the API secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadCredential {
    pub cloud_name: String,
    pub api_key: String,
    pub timestamp: i64,
    pub signature: String,
    pub folder: String,
}
