//! Handlers for translation pack listing, lookup and detail-page helpers.
//!
//! Card payloads borrow from the shared snapshot, so handlers serialize
//! them into a [`Response`] before returning.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pixellingual_core::error::CoreError;
use pixellingual_core::search::{
    clamp_limit, reveal, sort_packs, Reveal, DEFAULT_RECENT_COUNT, DEFAULT_RELATED_LIMIT,
    MAX_RECENT_COUNT, MAX_RELATED_LIMIT,
};
use pixellingual_core::types::PackId;
use pixellingual_core::view::{cards, PackCard, PageMetadata};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::{ApiPath, ApiQuery};
use crate::query::{PackListParams, RecentParams, RelatedParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// One reveal window of the market list.
#[derive(Debug, Serialize)]
pub struct PackPage<'a> {
    pub items: Vec<PackCard<'a>>,
    #[serde(flatten)]
    pub reveal: Reveal,
}

/// Detail-page neighbours rendered as cards.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedCards<'a> {
    pub studio: Vec<PackCard<'a>>,
    pub by_author: Vec<PackCard<'a>>,
    pub tag: Option<&'a str>,
    pub by_tag: Vec<PackCard<'a>>,
}

/// GET /api/v1/packs
///
/// Market list: tag filter, then search, then optional sort, then the
/// current reveal window.
pub async fn list_packs(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PackListParams>,
) -> AppResult<Response> {
    let order = params.sort_order()?;
    let today = state.today();

    let mut matched = state.catalog.filter(&params.filter());
    if let Some(order) = order {
        matched = sort_packs(matched, order);
    }

    let window = reveal(matched.len(), params.visible);
    tracing::debug!(
        tag = ?params.tag,
        query = ?params.q,
        total = window.total,
        visible = window.visible,
        "Pack list filtered"
    );

    let page = PackPage {
        items: cards(&matched[..window.visible], today),
        reveal: window,
    };

    Ok(Json(DataResponse { data: page }).into_response())
}

/// GET /api/v1/packs/all
///
/// The raw record collection, in authored order.
pub async fn all_packs(State(state): State<AppState>) -> Response {
    Json(DataResponse {
        data: state.catalog.all(),
    })
    .into_response()
}

/// GET /api/v1/packs/recent
///
/// Most recently created packs, newest first.
pub async fn recent_packs(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RecentParams>,
) -> Response {
    let count = clamp_limit(params.count, DEFAULT_RECENT_COUNT, MAX_RECENT_COUNT);
    let recent = state.catalog.most_recent(count);

    Json(DataResponse {
        data: cards(&recent, state.today()),
    })
    .into_response()
}

/// GET /api/v1/packs/featured
pub async fn featured_packs(State(state): State<AppState>) -> Response {
    let featured = state.catalog.featured();

    Json(DataResponse {
        data: cards(&featured, state.today()),
    })
    .into_response()
}

/// GET /api/v1/packs/{id}
pub async fn get_pack(
    State(state): State<AppState>,
    ApiPath(pack_id): ApiPath<PackId>,
) -> AppResult<Response> {
    let pack = state
        .catalog
        .get_by_id(pack_id)
        .ok_or_else(|| CoreError::not_found("TranslationPack", pack_id))?;

    Ok(Json(DataResponse {
        data: PackCard::new(pack, state.today()),
    })
    .into_response())
}

/// GET /api/v1/packs/{id}/related
///
/// "More from this studio", "more by this translator" and "more with this
/// tag", excluding the pack itself.
pub async fn related_packs(
    State(state): State<AppState>,
    ApiPath(pack_id): ApiPath<PackId>,
    ApiQuery(params): ApiQuery<RelatedParams>,
) -> AppResult<Response> {
    let limit = clamp_limit(params.limit, DEFAULT_RELATED_LIMIT, MAX_RELATED_LIMIT);
    let related = state
        .catalog
        .related(pack_id, limit)
        .ok_or_else(|| CoreError::not_found("TranslationPack", pack_id))?;

    let today = state.today();
    let data = RelatedCards {
        studio: cards(&related.studio, today),
        by_author: cards(&related.by_author, today),
        tag: related.tag,
        by_tag: cards(&related.by_tag, today),
    };

    Ok(Json(DataResponse { data }).into_response())
}

/// GET /api/v1/packs/{id}/metadata
///
/// Page `<head>` metadata. Unknown ids get the generic listing metadata
/// rather than a 404, so the renderer can still emit a valid page.
pub async fn pack_metadata(
    State(state): State<AppState>,
    ApiPath(pack_id): ApiPath<PackId>,
) -> Json<DataResponse<PageMetadata>> {
    Json(DataResponse {
        data: PageMetadata::for_pack(state.catalog.get_by_id(pack_id)),
    })
}
