//! Domain layer for the Mortydex plugin.
//!
//! This module contains the core domain types for the plugin, independent of
//! Zellij-specific APIs or the HTTP layer: value records mirroring the remote
//! schema, paging types, and the error taxonomy.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`character`]: Character, episode, and location records
//! - [`page`]: Page queries and pagination metadata

pub mod character;
pub mod error;
pub mod page;

pub use character::{Character, Episode, Location, ResourceRef};
pub use error::{MortydexError, Result};
pub use page::{PageQuery, PaginationInfo};
