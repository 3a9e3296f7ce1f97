//! Handlers for the studio directory and per-studio pack lists.
//!
//! Packs reference studios by `id`; the display name is never used as a key.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pixellingual_core::directory::{studio_by_id, Studio, STUDIOS};
use pixellingual_core::error::CoreError;
use pixellingual_core::view::{cards, PackCard};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::ApiPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// A studio together with its packs.
#[derive(Debug, Serialize)]
pub struct StudioPacks<'a> {
    pub studio: &'static Studio,
    pub packs: Vec<PackCard<'a>>,
}

fn find_studio(studio_id: &str) -> Result<&'static Studio, CoreError> {
    studio_by_id(studio_id).ok_or_else(|| CoreError::not_found("Studio", studio_id))
}

/// GET /api/v1/studios
pub async fn list_studios() -> Json<DataResponse<&'static [Studio]>> {
    Json(DataResponse { data: STUDIOS })
}

/// GET /api/v1/studios/{id}
pub async fn get_studio(
    ApiPath(studio_id): ApiPath<String>,
) -> AppResult<Json<DataResponse<&'static Studio>>> {
    let studio = find_studio(&studio_id)?;
    Ok(Json(DataResponse { data: studio }))
}

/// GET /api/v1/studios/{id}/packs
pub async fn studio_packs(
    State(state): State<AppState>,
    ApiPath(studio_id): ApiPath<String>,
) -> AppResult<Response> {
    let studio = find_studio(&studio_id)?;
    let packs = state.catalog.by_studio(studio.id, None);

    let data = StudioPacks {
        studio,
        packs: cards(&packs, state.today()),
    };

    Ok(Json(DataResponse { data }).into_response())
}
