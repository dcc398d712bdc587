//! Value records mirroring the remote character service schema.
//!
//! These types are immutable snapshots of what the API returns; the plugin never
//! synthesizes or mutates them. Records reference each other through URL strings
//! that encode the referenced id (see [`crate::api::urls::extract_id`]).

use serde::{Deserialize, Serialize};

/// A named reference to another API resource.
///
/// The `url` is empty for unknown origins/locations, otherwise it points at the
/// referenced resource on the service's own domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// A single character record.
///
/// `status` and `gender` are free-form strings as delivered by the service
/// ("Alive", "Dead", "unknown", ...); classification for display happens in
/// [`crate::ui::format`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(default)]
    pub r#type: String,
    pub gender: String,
    #[serde(default)]
    pub origin: ResourceRef,
    #[serde(default)]
    pub location: ResourceRef,
    #[serde(default)]
    pub image: String,
    /// Episode reference URLs this character appears in.
    #[serde(default)]
    pub episode: Vec<String>,
    #[serde(default)]
    pub url: String,
    /// RFC 3339 creation timestamp as delivered by the service.
    #[serde(default)]
    pub created: String,
}

/// A single episode record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub air_date: String,
    /// Episode code such as `S01E07`.
    #[serde(default)]
    pub episode: String,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created: String,
}

/// A single location record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub dimension: String,
    #[serde(default)]
    pub residents: Vec<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub created: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_decodes_with_missing_optional_fields() {
        let json = r#"{
            "id": 1,
            "name": "Rick Sanchez",
            "status": "Alive",
            "species": "Human",
            "gender": "Male"
        }"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.id, 1);
        assert_eq!(character.name, "Rick Sanchez");
        assert!(character.episode.is_empty());
        assert!(character.origin.url.is_empty());
    }

    #[test]
    fn location_decodes_type_keyword_field() {
        let json = r#"{"id": 3, "name": "Citadel of Ricks", "type": "Space station", "dimension": "unknown"}"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert_eq!(location.r#type, "Space station");
    }
}
