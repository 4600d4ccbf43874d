//! Template-content suite
//!
//! Existence, one check per documentation section, structural validity,
//! and the required-keys check. A missing template is one failure; the
//! remaining checks still run against empty content.

use crate::structure::{first_missing_key, validate, Validity};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vcheck_core::{Check, Report};

pub const SUITE_NAME: &str = "template-content";

/// A documentation section and the literal text that marks it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMarker {
    pub name: String,
    pub marker: String,
}

impl SectionMarker {
    pub fn new(name: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            marker: marker.into(),
        }
    }
}

pub fn default_sections() -> Vec<SectionMarker> {
    vec![
        SectionMarker::new("cache invalidation awareness", "CACHE INVALIDATION AWARENESS"),
        SectionMarker::new("turn protection", "TURN PROTECTION"),
        SectionMarker::new("error retention", "ERROR RETENTION"),
        SectionMarker::new("deduplication", "DEDUPLICATION"),
        SectionMarker::new("supersede writes", "SUPERSEDE WRITES"),
        SectionMarker::new("nudge frequency", "NUDGE FREQUENCY"),
        SectionMarker::new("cost implications", "COST IMPLICATIONS"),
        SectionMarker::new("re-read storm warning", "RE-READ STORM"),
        SectionMarker::new("recommended settings by use case", "RECOMMENDED SETTINGS BY USE CASE"),
        SectionMarker::new("large codebase guidance", "LARGE CODEBASE"),
        SectionMarker::new("quick bug fix guidance", "QUICK BUG FIX"),
    ]
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSuiteConfig {
    pub path: PathBuf,
    pub sections: Vec<SectionMarker>,
    pub required_keys: Vec<String>,
    /// Keys that let an unparseable template pass structurally
    pub fallback_keys: Vec<String>,
    /// Literal substituted for every placeholder before parsing
    pub placeholder_value: String,
}

impl Default for TemplateSuiteConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("templates/dcp.jsonc.tmpl"),
            sections: default_sections(),
            required_keys: keys(&["enabled", "turnProtection", "strategies", "tools"]),
            fallback_keys: keys(&["enabled", "turnProtection", "strategies"]),
            placeholder_value: "0".to_string(),
        }
    }
}

/// Template text as read from disk
#[derive(Debug, Clone)]
pub struct TemplateDocument {
    pub path: PathBuf,
    content: Option<String>,
}

impl TemplateDocument {
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "template unreadable");
                None
            }
        };
        Self {
            path: path.to_path_buf(),
            content,
        }
    }

    pub fn from_content(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: Some(content.into()),
        }
    }

    pub fn exists(&self) -> bool {
        self.content.is_some()
    }

    /// Content, empty when the file could not be read
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

pub struct TemplateSuite {
    config: TemplateSuiteConfig,
}

impl TemplateSuite {
    pub fn new(config: TemplateSuiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TemplateSuiteConfig {
        &self.config
    }

    /// Load the configured template and check it
    pub fn run(&self) -> Report {
        let document = TemplateDocument::load(&self.config.path);
        self.check_document(&document)
    }

    pub fn check_document(&self, document: &TemplateDocument) -> Report {
        let mut checks = vec![self.existence_check(document)];
        checks.extend(self.section_checks(document.text()));
        checks.push(self.structure_check(document.text()));
        checks.push(self.required_keys_check(document.text()));
        Report::new(SUITE_NAME, checks)
    }

    pub fn existence_check(&self, document: &TemplateDocument) -> Check {
        let path = document.path.display().to_string();
        if document.exists() {
            Check::ok("template exists", format!("{} ({} lines)", path, document.text().lines().count()))
        } else {
            Check::fail("template exists", format!("Template not found: {}", path))
                .with_values(path, "missing")
        }
    }

    pub fn section_checks(&self, content: &str) -> Vec<Check> {
        self.config
            .sections
            .iter()
            .map(|section| {
                let name = format!("{} section", section.name);
                if content.contains(&section.marker) {
                    Check::ok(name, format!("found '{}'", section.marker))
                } else {
                    Check::fail(name, format!("Missing section marker: {}", section.marker))
                        .with_values(section.marker.clone(), "not found")
                }
            })
            .collect()
    }

    pub fn structure(&self, content: &str) -> Validity {
        validate(content, &self.config.placeholder_value, &self.config.fallback_keys).validity
    }

    pub fn structure_check(&self, content: &str) -> Check {
        validate(content, &self.config.placeholder_value, &self.config.fallback_keys)
            .to_check("valid JSONC structure")
    }

    /// Stops at the first missing key and names it
    pub fn required_keys_check(&self, content: &str) -> Check {
        let name = "required configuration keys";
        match first_missing_key(content, &self.config.required_keys) {
            None => Check::ok(name, self.config.required_keys.join(", ")),
            Some(missing) => Check::fail(name, format!("Missing required key: \"{}\"", missing))
                .with_values(format!("\"{}\"", missing), "missing"),
        }
    }
}
