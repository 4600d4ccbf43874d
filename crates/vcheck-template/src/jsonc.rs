//! JSON-with-comments handling for templates.
//!
//! Works on the raw template text:
//! - Locating the object block
//! - Removing `//` and `/* */` comments outside strings
//! - Substituting `{{placeholder}}` tokens

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    /// Double-brace placeholder, e.g. `{{nudgeFrequency}}`
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{[^{}]*\}\}").unwrap();
}

/// Text from the first line starting with `{` through the first later line
/// that is only `}`. Runs to the end of the input when no closing line
/// follows.
pub fn extract_object_block(content: &str) -> Option<String> {
    let mut lines = content.lines();
    let first = lines.by_ref().find(|line| line.starts_with('{'))?;

    let mut block = vec![first];
    for line in lines {
        block.push(line);
        if line.trim_end() == "}" {
            break;
        }
    }
    Some(block.join("\n"))
}

/// Remove comments, leaving string literals untouched. Line breaks are
/// kept so parse errors still point at the right line.
pub fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                    }
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Replace every placeholder with `value`
pub fn replace_placeholders<'a>(input: &'a str, value: &str) -> Cow<'a, str> {
    PLACEHOLDER.replace_all(input, regex::NoExpand(value))
}
