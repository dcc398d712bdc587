//! Response envelopes and status-code handling for the character service.
//!
//! The plugin receives raw `(status, body)` pairs from the host runtime; this
//! module turns them into typed values or the error taxonomy in
//! [`crate::domain::error`]. A 404 is "no such resource" everywhere, any other
//! non-2xx status is a transport error, and a 2xx body is decoded with serde.

use serde::Deserialize;

use crate::domain::{Character, Episode, Location, MortydexError, PaginationInfo, Result};

/// Pagination block of a list response, as delivered by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiInfo {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

impl From<&ApiInfo> for PaginationInfo {
    fn from(info: &ApiInfo) -> Self {
        Self {
            total_count: info.count,
            total_pages: info.pages,
            has_next: info.next.is_some(),
            has_prev: info.prev.is_some(),
        }
    }
}

/// Envelope of `GET /character?page=..`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharactersResponse {
    #[serde(default)]
    pub info: ApiInfo,
    #[serde(default)]
    pub results: Vec<Character>,
}

/// The episode endpoint returns a single object for one id and an array for
/// several; both shapes decode through this enum.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

/// Maps a non-2xx status to the error taxonomy.
fn status_error(status: u16, what: &str) -> MortydexError {
    if status == 404 {
        MortydexError::NotFound(what.to_string())
    } else {
        MortydexError::Transport { status }
    }
}

/// Decodes a character list response.
///
/// # Errors
///
/// 404 becomes [`MortydexError::NotFound`] ("no results for this page"), other
/// non-2xx statuses become [`MortydexError::Transport`], and undecodable bodies
/// become [`MortydexError::Decode`].
pub fn decode_character_list(status: u16, body: &[u8]) -> Result<CharactersResponse> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, "no characters found for this page"));
    }
    Ok(serde_json::from_slice(body)?)
}

/// Decodes a single-character response.
///
/// # Errors
///
/// See [`decode_character_list`]; 404 here means the character id is unknown.
pub fn decode_character(status: u16, body: &[u8]) -> Result<Character> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, "character not found"));
    }
    Ok(serde_json::from_slice(body)?)
}

/// Decodes an episode batch response into a vector, whatever the batch size.
///
/// # Errors
///
/// See [`decode_character_list`].
pub fn decode_episodes(status: u16, body: &[u8]) -> Result<Vec<Episode>> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, "episodes not found"));
    }
    let parsed: OneOrMany<Episode> = serde_json::from_slice(body)?;
    Ok(parsed.into())
}

/// Decodes a single-location response.
///
/// # Errors
///
/// See [`decode_character_list`].
pub fn decode_location(status: u16, body: &[u8]) -> Result<Location> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, "location not found"));
    }
    Ok(serde_json::from_slice(body)?)
}
