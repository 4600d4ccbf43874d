//! Unified Error Model
//!
//! Assertion failures are never errors; they are recorded as checks.
//! These variants cover the things that stop a suite from being set up.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("CONFIG/{0}")]
    ConfigError(String),

    #[error("IO/{}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("SERIALIZE/{0}")]
    SerializeError(String),
}

pub type VerifyResult<T> = Result<T, VerifyError>;

impl VerifyError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_prefixes() {
        let err = VerifyError::ConfigError("unknown suite".to_string());
        assert_eq!(err.to_string(), "CONFIG/unknown suite");

        let err = VerifyError::io(
            "profiles/missing.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().starts_with("IO/profiles/missing.yaml"));

        let err = VerifyError::SerializeError("profile".to_string());
        assert_eq!(err.to_string(), "SERIALIZE/profile");
    }
}
