//! Route definitions for translation packs.

use axum::routing::get;
use axum::Router;

use crate::handlers::packs;
use crate::state::AppState;

/// Pack routes mounted at `/packs`.
///
/// ```text
/// GET /                   -> list_packs (?tag=&q=&sort=&visible=)
/// GET /all                -> all_packs
/// GET /recent             -> recent_packs (?count=)
/// GET /featured           -> featured_packs
/// GET /{id}               -> get_pack
/// GET /{id}/related       -> related_packs (?limit=)
/// GET /{id}/metadata      -> pack_metadata
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(packs::list_packs))
        .route("/all", get(packs::all_packs))
        .route("/recent", get(packs::recent_packs))
        .route("/featured", get(packs::featured_packs))
        .route("/{id}", get(packs::get_pack))
        .route("/{id}/related", get(packs::related_packs))
        .route("/{id}/metadata", get(packs::pack_metadata))
}
