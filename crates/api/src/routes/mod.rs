pub mod health;
pub mod packs;
pub mod sections;
pub mod studios;
pub mod tags;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /packs                                           market list (filter, sort, reveal)
/// /packs/all                                       raw record collection
/// /packs/recent                                    most recently created
/// /packs/featured                                  featured carousel
/// /packs/{id}                                      pack card
/// /packs/{id}/related                              same studio / same tag
/// /packs/{id}/metadata                             page metadata
///
/// /studios                                         studio directory
/// /studios/{id}                                    studio
/// /studios/{id}/packs                              packs by studio
///
/// /sections                                        section directory
/// /sections/{id}/packs                             packs in section
///
/// /tags                                            tag vocabulary
/// /tags/{tag}/packs                                packs by tag
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/packs", packs::router())
        .nest("/studios", studios::router())
        .nest("/sections", sections::router())
        .nest("/tags", tags::router())
}
