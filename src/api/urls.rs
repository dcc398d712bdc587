//! Endpoint URL construction and reference URL parsing.
//!
//! All requests to the remote character service are built here, so validation
//! happens in exactly one place and before anything goes on the wire. Reference
//! URLs returned by the service (`.../episode/28`) encode the referenced id in
//! their last path segment; [`extract_id`] recovers it.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::domain::{MortydexError, Result};

/// Base URL of the remote character service.
pub const BASE_URL: &str = "https://rickandmortyapi.com/api";

/// Path prefix every valid location reference must carry.
const LOCATION_PREFIX: &str = "https://rickandmortyapi.com/api/location/";

/// Builds the paginated character list URL.
///
/// The name filter is trimmed and percent-encoded; a blank filter is omitted
/// entirely rather than sent as an empty parameter.
#[must_use]
pub fn character_list(base: &str, page: u32, name_filter: &str) -> String {
    let trimmed = name_filter.trim();
    if trimmed.is_empty() {
        format!("{base}/character/?page={page}")
    } else {
        let encoded = utf8_percent_encode(trimmed, NON_ALPHANUMERIC);
        format!("{base}/character/?page={page}&name={encoded}")
    }
}

/// Builds the single-character URL.
#[must_use]
pub fn character(base: &str, id: u32) -> String {
    format!("{base}/character/{id}")
}

/// Builds the single-location URL.
#[must_use]
pub fn location(base: &str, id: u32) -> String {
    format!("{base}/location/{id}")
}

/// Builds the batch episode URL for one or more ids.
///
/// # Errors
///
/// Returns [`MortydexError::Validation`] when `ids` is empty; the service would
/// answer such a request with its full episode list, which is never what the
/// caller wants.
pub fn episodes(base: &str, ids: &[u32]) -> Result<String> {
    if ids.is_empty() {
        return Err(MortydexError::Validation(
            "episode id list is empty".to_string(),
        ));
    }
    let joined = ids
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    Ok(format!("{base}/episode/{joined}"))
}

/// Validates a location reference URL before it is fetched.
///
/// The service hands back absolute URLs; anything that does not point at its
/// own location endpoint is rejected here instead of being followed.
///
/// # Errors
///
/// Returns [`MortydexError::Validation`] for empty URLs and URLs outside the
/// service's location namespace.
pub fn validate_location_url(url: &str) -> Result<&str> {
    if url.is_empty() {
        return Err(MortydexError::Validation(
            "location URL is empty".to_string(),
        ));
    }
    if !url.starts_with(LOCATION_PREFIX) {
        return Err(MortydexError::Validation(format!(
            "not a character service location URL: {url}"
        )));
    }
    Ok(url)
}

/// Extracts the numeric id from a reference URL's last path segment.
///
/// Returns `None` for URLs whose last segment is not a number, so malformed
/// references are skipped rather than failing a whole batch.
#[must_use]
pub fn extract_id(url: &str) -> Option<u32> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse::<u32>().ok())
}

/// Extracts ids from a list of reference URLs, skipping malformed entries.
#[must_use]
pub fn extract_ids(urls: &[String]) -> Vec<u32> {
    urls.iter().filter_map(|url| extract_id(url)).collect()
}
