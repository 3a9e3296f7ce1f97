use axum::routing::get;
use axum::Router;

use crate::handlers::sections;
use crate::state::AppState;

/// Section routes mounted at `/sections`.
///
/// ```text
/// GET /                   -> list_sections
/// GET /{id}/packs         -> section_packs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(sections::list_sections))
        .route("/{id}/packs", get(sections::section_packs))
}
