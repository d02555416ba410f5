//! Request queue and head parsing.
//!
//! Queues arrive as a single delimited string (`"98, 183, 37"`). Tokens are
//! trimmed and empty tokens (trailing or doubled delimiters) are skipped, so
//! an empty or blank string is an empty queue. Anything that is not a
//! non-negative integer is `InvalidInput` naming the token.

use seeksim_core::error::{Error, Result};
use seeksim_core::types::Cylinder;

pub fn parse_cylinder(token: &str) -> Result<Cylinder> {
    let t = token.trim();
    if t.is_empty() {
        return Err(Error::invalid_input(token, "empty value"));
    }
    if let Some(rest) = t.strip_prefix('-') {
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_input(t, "cylinder numbers must be non-negative"));
        }
    }
    t.parse::<Cylinder>()
        .map_err(|e| Error::invalid_input(t, format!("not a cylinder number ({e})")))
}

/// Check an integer that arrived already typed (YAML lists, YAML heads).
pub fn cylinder_from_int(value: i64) -> Result<Cylinder> {
    if value < 0 {
        return Err(Error::invalid_input(
            value.to_string(),
            "cylinder numbers must be non-negative",
        ));
    }
    Cylinder::try_from(value)
        .map_err(|e| Error::invalid_input(value.to_string(), format!("not a cylinder number ({e})")))
}

pub fn parse_head(text: &str) -> Result<Cylinder> {
    parse_cylinder(text)
}

pub fn parse_queue(text: &str, delimiter: &str) -> Result<Vec<Cylinder>> {
    if delimiter.is_empty() {
        return Err(Error::Config("delimiter must not be empty".to_string()));
    }
    text.split(delimiter)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(parse_cylinder)
        .collect()
}
