//! Search, filtering, sorting and incremental-reveal helpers.
//!
//! Search is case-insensitive substring matching over a handful of text
//! fields. There is no ranking: results keep the order of their input.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::date_sort_key;
use crate::error::CoreError;
use crate::pack::TranslationPack;

// ---------------------------------------------------------------------------
// Reveal / limit defaults
// ---------------------------------------------------------------------------

/// Cards shown before the visitor asks for more.
pub const INITIAL_VISIBLE: usize = 12;

/// Cards added per "load more" / scroll step.
pub const REVEAL_STEP: usize = 6;

/// Default count for the "recently added" strip.
pub const DEFAULT_RECENT_COUNT: usize = 3;

/// Maximum count for the "recently added" strip.
pub const MAX_RECENT_COUNT: usize = 50;

/// Default number of neighbours per group on a detail page.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// Maximum number of neighbours per group on a detail page.
pub const MAX_RELATED_LIMIT: usize = 24;

/// Clamp a user-provided limit to `1..=max`.
pub fn clamp_limit(limit: Option<usize>, default: usize, max: usize) -> usize {
    limit.unwrap_or(default).clamp(1, max)
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Whether `pack` matches an already-lowercased query.
fn matches_query(pack: &TranslationPack, lowered: &str) -> bool {
    pack.title.to_lowercase().contains(lowered)
        || pack.description.to_lowercase().contains(lowered)
        || pack.tags.iter().any(|t| t.to_lowercase().contains(lowered))
        || pack.author.to_lowercase().contains(lowered)
        || pack.studio.to_lowercase().contains(lowered)
}

/// Keep the candidates whose title, description, tags, author or studio
/// contain `query` (case-insensitive).
///
/// An empty query returns the candidates unchanged.
pub fn search<'a>(query: &str, candidates: Vec<&'a TranslationPack>) -> Vec<&'a TranslationPack> {
    if query.is_empty() {
        return candidates;
    }

    let lowered = query.to_lowercase();
    candidates
        .into_iter()
        .filter(|pack| matches_query(pack, &lowered))
        .collect()
}

// ---------------------------------------------------------------------------
// Filter
// ---------------------------------------------------------------------------

/// Optional tag and free-text query for the market list.
///
/// Missing or empty fields do not filter anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackFilter {
    pub tag: Option<String>,
    #[serde(alias = "q")]
    pub query: Option<String>,
}

impl PackFilter {
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Apply the tag filter, then the search filter.
    pub fn apply<'a>(&self, candidates: Vec<&'a TranslationPack>) -> Vec<&'a TranslationPack> {
        let tagged = match self.tag.as_deref() {
            Some(tag) if !tag.is_empty() => candidates
                .into_iter()
                .filter(|pack| pack.has_tag(tag))
                .collect(),
            _ => candidates,
        };

        match self.query.as_deref() {
            Some(query) => search(query, tagged),
            None => tagged,
        }
    }
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

/// Orderings offered by the market list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// `createdAt` descending.
    Newest,
    /// `rating` descending.
    Rating,
    /// `price` ascending.
    Price,
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "rating" => Ok(SortOrder::Rating),
            "price" => Ok(SortOrder::Price),
            other => Err(CoreError::Validation(format!(
                "Invalid sort order '{other}'. Must be one of: newest, rating, price"
            ))),
        }
    }
}

/// Return a newly ordered list. Ties keep their input order.
pub fn sort_packs<'a>(
    mut packs: Vec<&'a TranslationPack>,
    order: SortOrder,
) -> Vec<&'a TranslationPack> {
    match order {
        SortOrder::Newest => {
            packs.sort_by(|a, b| date_sort_key(&b.created_at).cmp(&date_sort_key(&a.created_at)))
        }
        SortOrder::Rating => packs.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOrder::Price => packs.sort_by(|a, b| a.price.total_cmp(&b.price)),
    }
    packs
}

// ---------------------------------------------------------------------------
// Incremental reveal
// ---------------------------------------------------------------------------

/// How much of a filtered list is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reveal {
    pub total: usize,
    pub visible: usize,
    pub has_more: bool,
    /// Visible count after one more reveal step.
    pub next_visible: usize,
}

/// Compute the reveal window for a list of `total` items.
///
/// `requested` defaults to [`INITIAL_VISIBLE`] and is capped at `total`.
pub fn reveal(total: usize, requested: Option<usize>) -> Reveal {
    let visible = requested.unwrap_or(INITIAL_VISIBLE).min(total);

    Reveal {
        total,
        visible,
        has_more: visible < total,
        next_visible: (visible + REVEAL_STEP).min(total),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
