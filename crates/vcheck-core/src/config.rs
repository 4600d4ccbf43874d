//! YAML profile loading shared by the suites and the CLI.
use crate::error::{VerifyError, VerifyResult};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Parse a profile from YAML text
pub fn from_yaml<T: DeserializeOwned>(yaml: &str) -> VerifyResult<T> {
    serde_yaml::from_str(yaml).map_err(|e| VerifyError::ConfigError(e.to_string()))
}

/// Load a profile from a YAML file
pub fn load_yaml<T: DeserializeOwned>(path: &Path) -> VerifyResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| VerifyError::io(path, e))?;
    tracing::debug!(path = %path.display(), "loaded profile");
    from_yaml(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Thresholds {
        epsilon: f64,
        #[serde(default)]
        runs: u32,
    }

    #[test]
    fn test_from_yaml() {
        let t: Thresholds = from_yaml("epsilon: 0.5\nruns: 3\n").unwrap();
        assert_eq!(t.epsilon, 0.5);
        assert_eq!(t.runs, 3);
    }

    #[test]
    fn test_malformed_yaml_is_config_error() {
        let err = from_yaml::<Thresholds>("epsilon: [").unwrap_err();
        assert!(err.to_string().starts_with("CONFIG/"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_yaml::<Thresholds>(Path::new("/nonexistent/profile.yaml")).unwrap_err();
        assert!(matches!(err, VerifyError::IoError { .. }));
    }
}
