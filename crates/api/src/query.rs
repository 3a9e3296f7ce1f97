//! Shared query parameter types for API handlers.

use pixellingual_core::search::{PackFilter, SortOrder};
use serde::Deserialize;

use crate::error::AppError;

/// Market list parameters (`?tag=&q=&sort=&visible=`).
#[derive(Debug, Default, Deserialize)]
pub struct PackListParams {
    pub tag: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
    /// Cards already revealed; defaults to the initial window.
    pub visible: Option<usize>,
}

impl PackListParams {
    pub fn filter(&self) -> PackFilter {
        PackFilter {
            tag: self.tag.clone(),
            query: self.q.clone(),
        }
    }

    /// Parsed sort order. An empty `sort` is treated as absent.
    pub fn sort_order(&self) -> Result<Option<SortOrder>, AppError> {
        match self.sort.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => Ok(Some(raw.parse()?)),
        }
    }
}

/// `?count=` for the "recently added" strip.
#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub count: Option<usize>,
}

/// `?limit=` for detail-page neighbours.
#[derive(Debug, Deserialize)]
pub struct RelatedParams {
    pub limit: Option<usize>,
}
