//! Query parameter parsing
//!
//! Malformed numbers are rejected here, before the request reaches the core.

use crate::{Result, WebError};

const TRUTHY: [&str; 4] = ["1", "yes", "true", "on"];

/// `size`: any integer. Values at or below 1 mean "groups with anagrams".
pub(crate) fn parse_size(raw: Option<&str>) -> Result<Option<usize>> {
    raw.map(|value| {
        value
            .parse::<i64>()
            .map(|n| usize::try_from(n).unwrap_or(0))
            .map_err(|_| invalid("size", value))
    })
    .transpose()
}

/// `limit`: a non-negative integer
pub(crate) fn parse_limit(raw: Option<&str>) -> Result<Option<usize>> {
    raw.map(|value| value.parse::<usize>().map_err(|_| invalid("limit", value)))
        .transpose()
}

/// Boolean-like flag: `1`, `yes`, `true` or `on` in any case. Anything else,
/// including absence, is false.
pub(crate) fn parse_flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(value)))
}

fn invalid(name: &'static str, value: &str) -> WebError {
    WebError::InvalidParameter {
        name,
        value: value.to_string(),
    }
}
