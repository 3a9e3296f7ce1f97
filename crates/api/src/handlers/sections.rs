//! Handlers for curated sections.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pixellingual_core::directory::{section_by_id, Section, SECTIONS};
use pixellingual_core::error::CoreError;
use pixellingual_core::view::{cards, PackCard};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::ApiPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// A section together with its member packs.
#[derive(Debug, Serialize)]
pub struct SectionPacks<'a> {
    pub section: &'static Section,
    pub packs: Vec<PackCard<'a>>,
}

/// GET /api/v1/sections
pub async fn list_sections() -> Json<DataResponse<&'static [Section]>> {
    Json(DataResponse { data: SECTIONS })
}

/// GET /api/v1/sections/{id}/packs
///
/// Unknown section ids are a 404; a known section with no members is an
/// empty list.
pub async fn section_packs(
    State(state): State<AppState>,
    ApiPath(section_id): ApiPath<String>,
) -> AppResult<Response> {
    let section =
        section_by_id(&section_id).ok_or_else(|| CoreError::not_found("Section", &section_id))?;
    let packs = state.catalog.by_section(section.id);

    let data = SectionPacks {
        section,
        packs: cards(&packs, state.today()),
    };

    Ok(Json(DataResponse { data }).into_response())
}
