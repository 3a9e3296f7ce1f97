//! Handlers for the tag vocabulary and per-tag pack lists.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pixellingual_core::directory::{is_known_tag, TAGS};
use pixellingual_core::view::{cards, PackCard};
use serde::Serialize;

use crate::extract::ApiPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// Packs for one tag. `tag` echoes the requested spelling.
#[derive(Debug, Serialize)]
pub struct TagPacks<'a> {
    pub tag: String,
    pub packs: Vec<PackCard<'a>>,
}

/// GET /api/v1/tags
pub async fn list_tags() -> Json<DataResponse<&'static [&'static str]>> {
    Json(DataResponse { data: TAGS })
}

/// GET /api/v1/tags/{tag}/packs
///
/// Case-insensitive. Tags outside the vocabulary are allowed and simply
/// match nothing unless a pack carries them.
pub async fn tag_packs(
    State(state): State<AppState>,
    ApiPath(tag): ApiPath<String>,
) -> Response {
    if !is_known_tag(&tag) {
        tracing::debug!(%tag, "Tag outside the known vocabulary");
    }
    let packs = state.catalog.by_tag(&tag, None);

    let data = TagPacks {
        packs: cards(&packs, state.today()),
        tag,
    };

    Json(DataResponse { data }).into_response()
}
