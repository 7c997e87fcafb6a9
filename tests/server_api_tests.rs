use std::path::PathBuf;

use ammoguide::config::ServerConfig;
use ammoguide::data::WeaponTable;
use ammoguide::server::api;
use ammoguide::server::routes::{api_router, app};
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

async fn get(router: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("router should respond");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

fn router() -> axum::Router {
    api_router(WeaponTable::load().expect("built-in catalog should load"))
}

#[test]
fn health_payload_reports_weapon_count() {
    let table = WeaponTable::load().expect("built-in catalog should load");
    let payload: serde_json::Value =
        serde_json::from_str(&api::health_payload(&table).expect("health")).expect("valid json");
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["service"], "ammoguide-api");
    assert_eq!(payload["weapons"], 16);
}

#[tokio::test]
async fn weapon_list_is_in_catalog_order() {
    let (status, body) = get(router(), "/api/weapons").await;
    assert_eq!(status, StatusCode::OK);

    let payload: serde_json::Value = serde_json::from_str(&body).expect("valid json");
    assert_eq!(payload["count"], 16);
    let weapons = payload["weapons"].as_array().expect("weapons array");
    assert_eq!(weapons.first().and_then(|w| w["name"].as_str()), Some("AK4D"));
    assert_eq!(weapons.last().and_then(|w| w["name"].as_str()), Some("USG-90"));
}

#[tokio::test]
async fn weapon_list_filters_by_class() {
    let (status, body) = get(router(), "/api/weapons?class=Assault%20Rifle").await;
    assert_eq!(status, StatusCode::OK);
    let payload: serde_json::Value = serde_json::from_str(&body).expect("valid json");
    assert_eq!(payload["count"], 4);
    for weapon in payload["weapons"].as_array().expect("weapons array") {
        assert_eq!(weapon["weaponClass"], "Assault Rifle");
    }

    let (status, body) = get(router(), "/api/weapons?class=shotgun").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("\"status\": \"error\""));
}

#[tokio::test]
async fn weapon_lookup_decodes_names_with_spaces() {
    let (status, body) = get(router(), "/api/weapons/SOR-556%20MK2").await;
    assert_eq!(status, StatusCode::OK);
    let payload: serde_json::Value = serde_json::from_str(&body).expect("valid json");
    assert_eq!(payload["name"], "SOR-556 MK2");
    assert_eq!(
        payload["ttkImage"],
        "visualizations/TTK_ANALYSIS/Assault Rifle/SOR-556 MK2.png"
    );
    assert!(payload.get("rangeImage3HS").is_none());
}

#[tokio::test]
async fn unknown_weapon_returns_not_found() {
    let (status, body) = get(router(), "/api/weapons/NONEXISTENT-WEAPON").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let payload: serde_json::Value = serde_json::from_str(&body).expect("valid json");
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["message"], "Weapon not found");
}

#[tokio::test]
async fn classes_group_weapon_names() {
    let (status, body) = get(router(), "/api/classes").await;
    assert_eq!(status, StatusCode::OK);
    let payload: serde_json::Value = serde_json::from_str(&body).expect("valid json");
    let classes = payload["classes"].as_array().expect("classes array");
    assert_eq!(classes.len(), 4);
    assert_eq!(classes[3]["class"], "SMG");
    assert_eq!(classes[3]["weapons"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn unknown_route_returns_json_not_found() {
    let (status, body) = get(router(), "/api/hostiles").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let payload: serde_json::Value = serde_json::from_str(&body).expect("valid json");
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["message"], "Route not found");
}

#[tokio::test]
async fn index_page_is_served() {
    let table = WeaponTable::load().expect("built-in catalog should load");
    let config = ServerConfig {
        assets_dir: PathBuf::from("does-not-exist"),
        ..ServerConfig::default()
    };
    let (status, body) = get(app(table, &config), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/api/weapons"));
}

#[tokio::test]
async fn missing_chart_image_is_not_found() {
    let table = WeaponTable::load().expect("built-in catalog should load");
    let config = ServerConfig {
        assets_dir: std::env::temp_dir().join("ammoguide-no-assets"),
        ..ServerConfig::default()
    };
    let (status, _) = get(
        app(table, &config),
        "/visualizations/INDIVIDUAL_WEAPONS/AK4D_1HS.png",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
