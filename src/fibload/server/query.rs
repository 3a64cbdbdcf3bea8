use std::error::Error;
use std::fmt;

use fibload_lib::constants::INDEX_PARAMETER;
use fibload_lib::constants::INVALID_INDEX_MESSAGE;
use fibload_lib::constants::MISSING_INDEX_MESSAGE;

/// Why a request's index was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidIndex {
    /// `n` is absent, empty, not a number or does not fit an `i64`.
    Missing,

    /// `n` is a number, but below 1.
    OutOfDomain,
}

impl fmt::Display for InvalidIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidIndex::Missing => f.write_str(MISSING_INDEX_MESSAGE),
            InvalidIndex::OutOfDomain => f.write_str(INVALID_INDEX_MESSAGE),
        }
    }
}

impl Error for InvalidIndex {}

/// Extract and validate the index from a raw query string.
///
/// Only the first `n` counts. The value is form-url-decoded and may carry
/// a leading sign.
pub fn parse_index(query: Option<&str>) -> Result<i64, InvalidIndex> {
    let raw = query.and_then(|query| {
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == INDEX_PARAMETER)
            .map(|(_, value)| value.into_owned())
    });

    let n: i64 = raw
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|_| InvalidIndex::Missing)?;

    if n < 1 {
        return Err(InvalidIndex::OutOfDomain);
    }

    Ok(n)
}

#[cfg(test)]
#[path = "tests/query.rs"]
mod tests;
