//! HTTP-level integration tests for studio, section and tag endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, ids};

/// URL-encoded `生存`.
const TAG_SURVIVAL: &str = "%E7%94%9F%E5%AD%98";

// ---------------------------------------------------------------------------
// Studios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_studios() {
    let json = body_json(get(build_test_app(), "/api/v1/studios").await).await;
    let studios = json["data"].as_array().unwrap();

    assert_eq!(studios.len(), 10);
    assert_eq!(studios[0]["id"], "mojang");
    assert_eq!(studios[0]["name"], "Mojang Studios");
}

#[tokio::test]
async fn get_studio_by_id() {
    let json = body_json(get(build_test_app(), "/api/v1/studios/noxcrew").await).await;
    assert_eq!(json["data"]["name"], "Noxcrew");
}

#[tokio::test]
async fn studio_lookup_uses_id_not_display_name() {
    let response = get(build_test_app(), "/api/v1/studios/Mojang%20Studios").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Studio with id Mojang Studios not found");
}

#[tokio::test]
async fn studio_packs_in_source_order() {
    let response = get(build_test_app(), "/api/v1/studios/noxcrew/packs").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["studio"]["id"], "noxcrew");
    assert_eq!(ids(&json["data"]["packs"]), vec![1, 3, 5]);
}

#[tokio::test]
async fn known_studio_without_packs_is_empty() {
    let json = body_json(get(build_test_app(), "/api/v1/studios/oreville/packs").await).await;
    assert!(json["data"]["packs"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_studio_packs_returns_404() {
    let response = get(build_test_app(), "/api/v1/studios/nobody/packs").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_sections() {
    let json = body_json(get(build_test_app(), "/api/v1/sections").await).await;
    let sections = json["data"].as_array().unwrap();

    assert_eq!(sections.len(), 6);
    assert_eq!(sections[0]["id"], "dlc-content");
    assert_eq!(sections[0]["title"], "联动地图");
}

#[tokio::test]
async fn section_packs() {
    let json = body_json(
        get(build_test_app(), "/api/v1/sections/popular-translations/packs").await,
    )
    .await;
    assert_eq!(json["data"]["section"]["id"], "popular-translations");
    assert_eq!(ids(&json["data"]["packs"]), vec![1, 3]);

    let json = body_json(get(build_test_app(), "/api/v1/sections/free-maps/packs").await).await;
    assert_eq!(ids(&json["data"]["packs"]), vec![2, 3]);
}

#[tokio::test]
async fn empty_section_is_not_an_error() {
    let response = get(build_test_app(), "/api/v1/sections/leisure/packs").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["packs"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_section_returns_404() {
    let response = get(build_test_app(), "/api/v1/sections/nope/packs").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_tags() {
    let json = body_json(get(build_test_app(), "/api/v1/tags").await).await;
    let tags = json["data"].as_array().unwrap();

    assert_eq!(tags.len(), 10);
    assert_eq!(tags[0], "冒险");
}

#[tokio::test]
async fn tag_packs() {
    let uri = format!("/api/v1/tags/{TAG_SURVIVAL}/packs");
    let json = body_json(get(build_test_app(), &uri).await).await;

    assert_eq!(json["data"]["tag"], "生存");
    assert_eq!(ids(&json["data"]["packs"]), vec![2, 3]);
}

#[tokio::test]
async fn tag_packs_ignore_case() {
    let json = body_json(get(build_test_app(), "/api/v1/tags/pvp/packs").await).await;
    assert_eq!(json["data"]["tag"], "pvp");
    assert_eq!(ids(&json["data"]["packs"]), vec![4]);
}

#[tokio::test]
async fn unknown_tag_is_empty_not_error() {
    let response = get(build_test_app(), "/api/v1/tags/racing/packs").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["packs"].as_array().unwrap().is_empty());
}
