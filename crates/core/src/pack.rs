//! The translation pack record as authored in the bundled data file.

use serde::{Deserialize, Serialize};

use crate::types::PackId;

/// One downloadable localization package for one piece of third-party content.
///
/// Field names follow the camelCase keys of the record file so the snapshot
/// can be served back to renderers unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationPack {
    pub id: PackId,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub screenshots: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// `YYYYMMDD`.
    pub created_at: String,
    /// `YYYYMMDD`, expected to be on or after `created_at`.
    pub updated_at: String,
    pub author: String,
    /// Studio id (see [`crate::directory::STUDIOS`]).
    pub studio: String,
    #[serde(default, rename = "isDLC")]
    pub is_dlc: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub section_ids: Vec<String>,
    /// 0.0 - 5.0.
    pub rating: f64,
    /// 0 means free.
    pub price: f64,
    pub download_link: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl TranslationPack {
    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    pub fn in_section(&self, section_id: &str) -> bool {
        self.section_ids.iter().any(|s| s == section_id)
    }

    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Minimal pack with the given id; tests override what they care about.
    pub fn pack(id: PackId) -> TranslationPack {
        TranslationPack {
            id,
            title: format!("Pack {id}"),
            description: String::new(),
            image: String::new(),
            screenshots: Vec::new(),
            tags: Vec::new(),
            created_at: "20240101".to_string(),
            updated_at: "20240101".to_string(),
            author: "PixelLingual".to_string(),
            studio: "mojang".to_string(),
            is_dlc: false,
            is_featured: false,
            section_ids: Vec::new(),
            rating: 0.0,
            price: 0.0,
            download_link: String::new(),
            languages: Vec::new(),
            features: Vec::new(),
        }
    }
}
