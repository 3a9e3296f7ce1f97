//! Route definitions for the studio directory.

use axum::routing::get;
use axum::Router;

use crate::handlers::studios;
use crate::state::AppState;

/// Studio routes mounted at `/studios`.
///
/// ```text
/// GET /                   -> list_studios
/// GET /{id}               -> get_studio
/// GET /{id}/packs         -> studio_packs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(studios::list_studios))
        .route("/{id}", get(studios::get_studio))
        .route("/{id}/packs", get(studios::studio_packs))
}
