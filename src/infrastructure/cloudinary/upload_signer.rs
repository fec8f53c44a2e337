use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::domain::{
    errors::ServiceError, repositories::upload_signer::UploadSigner,
    value_objects::{signature_algorithms::SignatureAlgorithm, upload_credentials::UploadCredential},
};

pub const DEFAULT_UPLOAD_FOLDER: &str = "student_project";

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub upload_folder: String,
    pub signature_algorithm: SignatureAlgorithm,
}

impl CloudinaryConfig {
    /// Names of the account variables that are not set.
    pub fn missing_variables(&self) -> Vec<&'static str> {
        [
            ("CLOUDINARY_CLOUD_NAME", &self.cloud_name),
            ("CLOUDINARY_API_KEY", &self.api_key),
            ("CLOUDINARY_API_SECRET", &self.api_secret),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

pub struct CloudinaryUploadSigner {
    config: CloudinaryConfig,
}

impl CloudinaryUploadSigner {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self { config }
    }
}

impl UploadSigner for CloudinaryUploadSigner {
    fn sign_upload(&self, timestamp: i64) -> Result<UploadCredential, ServiceError> {
        let (Some(cloud_name), Some(api_key), Some(api_secret)) = (
            self.config.cloud_name.as_ref(),
            self.config.api_key.as_ref(),
            self.config.api_secret.as_ref(),
        ) else {
            return Err(ServiceError::Configuration(format!(
                "missing {}",
                self.config.missing_variables().join(", ")
            )));
        };

        let folder = self.config.upload_folder.clone();

        let mut params = BTreeMap::new();
        params.insert("folder", folder.clone());
        params.insert("timestamp", timestamp.to_string());

        let signature = api_sign_request(&params, api_secret, self.config.signature_algorithm);

        Ok(UploadCredential {
            cloud_name: cloud_name.clone(),
            api_key: api_key.clone(),
            timestamp,
            signature,
            folder,
        })
    }
}

/// Signs upload parameters the way Cloudinary verifies them:
/// https://cloudinary.com/documentation/authentication_signatures
///
/// Empty values are skipped, the rest are joined as `key=value` pairs in key
/// order, the secret is appended and the digest is hex encoded.
pub fn api_sign_request(
    params: &BTreeMap<&str, String>,
    api_secret: &str,
    algorithm: SignatureAlgorithm,
) -> String {
    let to_sign = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        // signature version 2
        .map(|(key, value)| format!("{}={}", key, value.replace('&', "%26")))
        .collect::<Vec<_>>()
        .join("&");

    let payload = format!("{}{}", to_sign, api_secret);

    match algorithm {
        SignatureAlgorithm::Sha1 => hex::encode(Sha1::digest(payload.as_bytes())),
        SignatureAlgorithm::Sha256 => hex::encode(Sha256::digest(payload.as_bytes())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(algorithm: SignatureAlgorithm) -> CloudinaryConfig {
        CloudinaryConfig {
            cloud_name: Some("demo".to_string()),
            api_key: Some("1234567890".to_string()),
            api_secret: Some("abcd".to_string()),
            upload_folder: DEFAULT_UPLOAD_FOLDER.to_string(),
            signature_algorithm: algorithm,
        }
    }

    #[test]
    fn matches_documented_signature() {
        let mut params = BTreeMap::new();
        params.insert("timestamp", "1315060510".to_string());
        params.insert("public_id", "sample_image".to_string());
        params.insert("eager", "w_400,h_300,c_pad|w_260,h_200,c_crop".to_string());

        let signature = api_sign_request(&params, "abcd", SignatureAlgorithm::Sha1);

        assert_eq!(signature, "bfd09f95f331f558cbd1320e67aa8d488770583e");
    }

    #[test]
    fn signature_recomputes_over_folder_and_timestamp() {
        let signer = CloudinaryUploadSigner::new(config(SignatureAlgorithm::Sha1));

        let credential = signer.sign_upload(1_700_000_000).unwrap();

        let expected = hex::encode(Sha1::digest(
            b"folder=student_project&timestamp=1700000000abcd",
        ));
        assert_eq!(credential.signature, expected);
        assert_eq!(credential.folder, "student_project");
        assert_eq!(credential.cloud_name, "demo");
        assert_eq!(credential.api_key, "1234567890");
        assert_eq!(credential.timestamp, 1_700_000_000);
    }

    #[test]
    fn sha256_is_used_when_configured() {
        let signer = CloudinaryUploadSigner::new(config(SignatureAlgorithm::Sha256));

        let credential = signer.sign_upload(1_700_000_000).unwrap();

        let expected = hex::encode(Sha256::digest(
            b"folder=student_project&timestamp=1700000000abcd",
        ));
        assert_eq!(credential.signature, expected);
        assert_eq!(credential.signature.len(), 64);
    }

    #[test]
    fn same_second_gives_same_signature() {
        let signer = CloudinaryUploadSigner::new(config(SignatureAlgorithm::Sha1));

        let first = signer.sign_upload(1_700_000_000).unwrap();
        let second = signer.sign_upload(1_700_000_000).unwrap();
        let later = signer.sign_upload(1_700_000_001).unwrap();

        assert_eq!(first, second);
        assert_ne!(first.signature, later.signature);
    }

    #[test]
    fn ampersand_in_values_is_escaped() {
        let mut params = BTreeMap::new();
        params.insert("folder", "a&b".to_string());
        params.insert("timestamp", "1".to_string());

        let signature = api_sign_request(&params, "s", SignatureAlgorithm::Sha1);

        assert_eq!(signature, hex::encode(Sha1::digest(b"folder=a%26b&timestamp=1s")));
    }

    #[test]
    fn empty_values_are_not_signed() {
        let mut params = BTreeMap::new();
        params.insert("folder", String::new());
        params.insert("timestamp", "42".to_string());

        let signature = api_sign_request(&params, "s", SignatureAlgorithm::Sha1);

        assert_eq!(signature, hex::encode(Sha1::digest(b"timestamp=42s")));
    }

    #[test]
    fn missing_credentials_are_a_configuration_error() {
        let signer = CloudinaryUploadSigner::new(CloudinaryConfig {
            api_secret: None,
            cloud_name: None,
            ..config(SignatureAlgorithm::Sha1)
        });

        match signer.sign_upload(1) {
            Err(ServiceError::Configuration(message)) => {
                assert_eq!(message, "missing CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_SECRET")
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn serialized_credential_never_contains_secret() {
        let signer = CloudinaryUploadSigner::new(CloudinaryConfig {
            api_secret: Some("very-secret-value".to_string()),
            ..config(SignatureAlgorithm::Sha1)
        });

        let credential = signer.sign_upload(1_700_000_000).unwrap();
        let body = serde_json::to_value(&credential).unwrap();

        assert!(!body.to_string().contains("very-secret-value"));
        assert_eq!(body["cloudName"], "demo");
        assert_eq!(body["apiKey"], "1234567890");
        assert_eq!(body["timestamp"], 1_700_000_000);
        assert_eq!(body["folder"], "student_project");
        assert!(body["signature"].is_string());
    }
}
