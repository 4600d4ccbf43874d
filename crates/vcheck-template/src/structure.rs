//! Structural validity of a template
//!
//! A strict parse of the object block is tried first. When that fails the
//! template can still pass on key presence alone, which is a much weaker
//! guarantee, so the result keeps the two apart.

use crate::jsonc::{extract_object_block, replace_placeholders, strip_comments};
use serde::{Deserialize, Serialize};
use vcheck_core::Check;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    /// Object block parsed as JSON
    Valid,
    /// Block did not parse, but the fallback keys are all present
    ValidByHeuristic,
    Invalid,
}

/// Validity plus the reason the strict parse failed, if it did
#[derive(Debug, Clone, PartialEq)]
pub struct StructureOutcome {
    pub validity: Validity,
    pub parse_error: Option<String>,
}

/// `"key"` followed by a colon, anywhere in the text
pub fn has_quoted_key(content: &str, key: &str) -> bool {
    let quoted = format!("\"{}\"", key);
    content
        .match_indices(&quoted)
        .any(|(at, _)| content[at + quoted.len()..].trim_start().starts_with(':'))
}

/// First key of `keys` that is not present, if any
pub fn first_missing_key<'a>(content: &str, keys: &'a [String]) -> Option<&'a str> {
    keys.iter()
        .map(String::as_str)
        .find(|key| !has_quoted_key(content, key))
}

/// Strict parse of the block, then the key-presence fallback
pub fn validate(content: &str, placeholder_value: &str, fallback_keys: &[String]) -> StructureOutcome {
    let parse_error = match extract_object_block(content) {
        None => "no line starting with '{'".to_string(),
        Some(block) => {
            let stripped = strip_comments(&block);
            let json = replace_placeholders(&stripped, placeholder_value);
            match serde_json::from_str::<serde_json::Value>(&json) {
                Ok(_) => {
                    return StructureOutcome {
                        validity: Validity::Valid,
                        parse_error: None,
                    }
                }
                Err(e) => e.to_string(),
            }
        }
    };

    tracing::debug!(error = %parse_error, "strict parse failed, trying key fallback");
    let validity = if first_missing_key(content, fallback_keys).is_none() {
        Validity::ValidByHeuristic
    } else {
        Validity::Invalid
    };
    StructureOutcome {
        validity,
        parse_error: Some(parse_error),
    }
}

impl StructureOutcome {
    pub fn to_check(&self, name: &str) -> Check {
        let error = self.parse_error.as_deref().unwrap_or_default();
        match self.validity {
            Validity::Valid => Check::ok(name, "object block parses as JSON"),
            Validity::ValidByHeuristic => Check::warn(
                name,
                format!("object block did not parse ({}); accepted on key presence", error),
            ),
            Validity::Invalid => Check::fail(name, format!("object block did not parse: {}", error))
                .with_values("parseable JSONC object", error),
        }
    }
}
