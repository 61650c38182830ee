//! Parsing of identifiers taken from URL path segments.

use crate::error::CoreError;
use crate::types::DbId;

/// Parse a raw path segment as an unsigned database id.
///
/// Signs, whitespace and values beyond `i64::MAX` are rejected. `label` is
/// used in the error message (e.g. `"product"` gives `Invalid product ID`).
pub fn parse_id(raw: &str, label: &str) -> Result<DbId, CoreError> {
    Some(raw)
        .filter(|r| !r.is_empty() && r.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|r| r.parse::<u64>().ok())
        .and_then(|v| DbId::try_from(v).ok())
        .ok_or_else(|| CoreError::Validation(format!("Invalid {label} ID")))
}
