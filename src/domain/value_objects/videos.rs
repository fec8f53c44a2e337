use serde::Deserialize;

use crate::domain::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SaveVideoModel {
    pub name: String,
    pub url: String,
    pub public_id: String,
}

impl SaveVideoModel {
    pub fn validate(&self) -> Result<(), ServiceError> {
        let fields = [
            ("name", &self.name),
            ("url", &self.url),
            ("public_id", &self.public_id),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ServiceError::Validation(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }

        Ok(())
    }
}
