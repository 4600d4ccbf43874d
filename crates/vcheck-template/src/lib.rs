//! vcheck Template: Template-Content Checker
//!
//! Verifies that a JSONC configuration template documents the required
//! sections, declares the required keys, and holds an object block that
//! parses once comments and placeholders are dealt with.
//!
//! # Example
//!
//! ```ignore
//! use vcheck_template::{TemplateSuite, TemplateSuiteConfig};
//!
//! let report = TemplateSuite::new(TemplateSuiteConfig::default()).run();
//! for check in report.failures() {
//!     println!("{}: {}", check.name, check.message);
//! }
//! ```

pub mod jsonc;
pub mod structure;
pub mod suite;

pub use structure::{has_quoted_key, validate, StructureOutcome, Validity};
pub use suite::{
    default_sections, SectionMarker, TemplateDocument, TemplateSuite, TemplateSuiteConfig, SUITE_NAME,
};
