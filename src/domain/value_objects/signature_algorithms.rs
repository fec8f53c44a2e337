use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
}

impl Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let algorithm = match self {
            SignatureAlgorithm::Sha1 => "sha1",
            SignatureAlgorithm::Sha256 => "sha256",
        };
        write!(f, "{}", algorithm)
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(SignatureAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(SignatureAlgorithm::Sha256),
            other => Err(format!("Unsupported signature algorithm: {}", other)),
        }
    }
}
