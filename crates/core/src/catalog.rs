//! The immutable pack snapshot and its lookup operations.
//!
//! A [`Catalog`] is built once from the record file and then only read.
//! Every query is a linear scan in source order; the collection is a small
//! curated list, so no index is kept.

use std::collections::HashSet;

use serde::Serialize;

use crate::date::date_sort_key;
use crate::error::CoreError;
use crate::pack::TranslationPack;
use crate::search::PackFilter;
use crate::types::PackId;

/// Read-only collection of translation packs in authored order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    packs: Vec<TranslationPack>,
}

/// Neighbours shown on a pack detail page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPacks<'a> {
    /// Other packs from the same studio.
    pub studio: Vec<&'a TranslationPack>,
    /// Other packs by the same translator.
    pub by_author: Vec<&'a TranslationPack>,
    /// The tag used for `by_tag`, if the pack has any.
    pub tag: Option<&'a str>,
    /// Other packs sharing that tag.
    pub by_tag: Vec<&'a TranslationPack>,
}

impl Catalog {
    pub fn new(packs: Vec<TranslationPack>) -> Self {
        let mut seen = HashSet::new();
        for pack in &packs {
            if !seen.insert(pack.id) {
                tracing::warn!(pack_id = pack.id, "Duplicate pack id in catalog");
            }
        }
        Self { packs }
    }

    /// Parse the record file (a JSON array of packs).
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let packs: Vec<TranslationPack> = serde_json::from_str(raw)
            .map_err(|e| CoreError::Internal(format!("Invalid pack record file: {e}")))?;
        Ok(Self::new(packs))
    }

    /// All packs in source order.
    pub fn all(&self) -> &[TranslationPack] {
        &self.packs
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    fn select<'a>(
        &'a self,
        exclude_id: Option<PackId>,
        predicate: impl Fn(&TranslationPack) -> bool,
    ) -> Vec<&'a TranslationPack> {
        self.packs
            .iter()
            .filter(|pack| exclude_id != Some(pack.id) && predicate(pack))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Lookups
    // -----------------------------------------------------------------------

    pub fn get_by_id(&self, id: PackId) -> Option<&TranslationPack> {
        self.packs.iter().find(|pack| pack.id == id)
    }

    /// Packs whose `studio` equals `studio_id` exactly.
    pub fn by_studio(&self, studio_id: &str, exclude_id: Option<PackId>) -> Vec<&TranslationPack> {
        self.select(exclude_id, |pack| pack.studio == studio_id)
    }

    /// Packs carrying `tag`, compared case-insensitively.
    pub fn by_tag(&self, tag: &str, exclude_id: Option<PackId>) -> Vec<&TranslationPack> {
        self.select(exclude_id, |pack| pack.has_tag(tag))
    }

    pub fn by_section(&self, section_id: &str) -> Vec<&TranslationPack> {
        self.select(None, |pack| pack.in_section(section_id))
    }

    pub fn by_author(&self, author: &str, exclude_id: Option<PackId>) -> Vec<&TranslationPack> {
        self.select(exclude_id, |pack| pack.author == author)
    }

    pub fn featured(&self) -> Vec<&TranslationPack> {
        self.select(None, |pack| pack.is_featured)
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    /// Apply a market filter (tag first, then search) over the whole catalog.
    pub fn filter(&self, filter: &PackFilter) -> Vec<&TranslationPack> {
        filter.apply(self.packs.iter().collect())
    }

    /// The `count` most recently created packs, newest first.
    ///
    /// Sorts a copy of the reference list; the snapshot keeps its order.
    pub fn most_recent(&self, count: usize) -> Vec<&TranslationPack> {
        let mut packs: Vec<&TranslationPack> = self.packs.iter().collect();
        packs.sort_by(|a, b| date_sort_key(&b.created_at).cmp(&date_sort_key(&a.created_at)));
        packs.truncate(count);
        packs
    }

    /// Same-studio, same-author and same-tag neighbours of `id`, at most
    /// `limit` each.
    ///
    /// Uses the pack's first tag. Returns `None` when `id` is unknown.
    pub fn related(&self, id: PackId, limit: usize) -> Option<RelatedPacks<'_>> {
        let pack = self.get_by_id(id)?;

        let mut studio = self.by_studio(&pack.studio, Some(id));
        studio.truncate(limit);

        let mut by_author = self.by_author(&pack.author, Some(id));
        by_author.truncate(limit);

        let tag = pack.tags.first().map(String::as_str);
        let mut by_tag = tag.map_or_else(Vec::new, |t| self.by_tag(t, Some(id)));
        by_tag.truncate(limit);

        Some(RelatedPacks {
            studio,
            by_author,
            tag,
            by_tag,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
