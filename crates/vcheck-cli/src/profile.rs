//! Check profiles
//!
//! A profile bundles the settings of both suites. Every field has a
//! default, so a profile file only needs the values it changes.

use serde::{Deserialize, Serialize};
use std::path::Path;
use vcheck_core::{config, VerifyResult};
use vcheck_cost::CostSuiteConfig;
use vcheck_template::TemplateSuiteConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Profile name (e.g., "default@1.0")
    pub name: String,

    pub cost: CostSuiteConfig,

    pub template: TemplateSuiteConfig,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "default@1.0".to_string(),
            cost: CostSuiteConfig::default(),
            template: TemplateSuiteConfig::default(),
        }
    }
}

impl Profile {
    /// Built-in defaults, or the given YAML file layered over them
    pub fn load(path: Option<&Path>) -> VerifyResult<Self> {
        match path {
            Some(path) => config::load_yaml(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml(yaml: &str) -> VerifyResult<Self> {
        config::from_yaml(yaml)
    }

    pub fn to_yaml(&self) -> VerifyResult<String> {
        serde_yaml::to_string(self).map_err(|e| vcheck_core::VerifyError::SerializeError(e.to_string()))
    }
}
