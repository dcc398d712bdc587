//! HTTP service layer for the remote character service.
//!
//! The plugin never performs blocking I/O itself: requests are described as
//! URLs plus a context map, handed to the Zellij host via `web_request`, and
//! answered later as `WebRequestResult` events. This module owns both ends of
//! that exchange: URL construction and validation ([`urls`]) and response
//! decoding ([`response`]).
//!
//! Endpoints (schema fixed by the service):
//!
//! - `GET /character?page={n}&name={filter?}`: paginated list with `info` block
//! - `GET /character/{id}`: single character
//! - `GET /episode/{id1,id2,...}`: one object for a single id, array otherwise
//! - `GET <location url>`: fetched by absolute URL, validated before dispatch

pub mod response;
pub mod urls;

pub use response::{
    decode_character, decode_character_list, decode_episodes, decode_location, ApiInfo,
    CharactersResponse,
};
pub use urls::{
    character, character_list, episodes, extract_id, extract_ids, location,
    validate_location_url, BASE_URL,
};
