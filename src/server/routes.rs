use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::services::ServeDir;

use crate::config::ServerConfig;
use crate::data::table::WeaponTable;
use crate::server::api::{self, ApiError};

pub type SharedTable = Arc<WeaponTable>;

#[derive(Debug, Default, Deserialize)]
pub struct WeaponsQuery {
    pub class: Option<String>,
}

/// API routes only. `app` adds the page and chart image serving.
pub fn api_router(table: SharedTable) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/weapons", get(list_weapons))
        .route("/api/weapons/:name", get(get_weapon))
        .route("/api/classes", get(list_classes))
        .fallback(not_found)
        .with_state(table)
}

pub fn app(table: SharedTable, config: &ServerConfig) -> Router {
    api_router(table)
        .route("/", get(index))
        .nest_service("/visualizations", ServeDir::new(config.visualizations_dir()))
}

async fn health(State(table): State<SharedTable>) -> Response {
    json_response(api::health_payload(&table))
}

async fn list_weapons(
    State(table): State<SharedTable>,
    Query(query): Query<WeaponsQuery>,
) -> Response {
    json_response(api::weapons_payload(&table, query.class.as_deref()))
}

async fn get_weapon(State(table): State<SharedTable>, Path(name): Path<String>) -> Response {
    json_response(api::weapon_payload(&table, &name))
}

async fn list_classes(State(table): State<SharedTable>) -> Response {
    json_response(api::classes_payload(&table))
}

async fn not_found() -> Response {
    json_response(Err(ApiError::RouteNotFound))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

fn json_response(result: Result<String, ApiError>) -> Response {
    match result {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => {
            let status =
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                api::error_payload(&err),
            )
                .into_response()
        }
    }
}

// Recommendation strings are inserted as HTML: the catalog is trusted content.
const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Ammo Guide</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 1000px; margin: 24px auto; padding: 0 12px; }
    select { padding: 6px; min-width: 220px; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 14px; margin: 14px 0; }
    .charts img { max-width: 100%; margin: 8px 0; border: 1px solid #eee; }
    .ammo-badge { border-radius: 4px; padding: 2px 6px; font-size: 0.8rem; color: #fff; }
    .badge-hp { background: #c0392b; }
    .badge-synthetic { background: #2980b9; }
    .badge-base { background: #7f8c8d; }
  </style>
</head>
<body>
  <h1>Ammo Guide</h1>
  <label for="weapon">Weapon</label>
  <select id="weapon"></select>
  <div class="card" id="recommendations"></div>
  <div class="charts" id="charts"></div>

  <script>
    const select = document.getElementById('weapon');
    const recs = document.getElementById('recommendations');
    const charts = document.getElementById('charts');
    let weapons = [];

    function render(name) {
      const w = weapons.find(x => x.name === name);
      if (!w) return;
      recs.innerHTML = w.recommendations.map(r => '<p>' + r + '</p>').join('');
      const images = [w.ttkImage, w.rangeImage1HS, w.rangeImage2HS, w.rangeImage3HS].filter(Boolean);
      charts.innerHTML = images.map(src => '<img src="/' + encodeURI(src) + '" alt="' + name + '" />').join('');
    }

    fetch('/api/weapons').then(r => r.json()).then(data => {
      weapons = data.weapons;
      let group = null;
      for (const w of weapons) {
        if (!group || group.label !== w.weaponClass) {
          group = document.createElement('optgroup');
          group.label = w.weaponClass;
          select.appendChild(group);
        }
        const opt = document.createElement('option');
        opt.value = w.name;
        opt.textContent = w.name;
        group.appendChild(opt);
      }
      if (weapons.length) render(weapons[0].name);
    });
    select.addEventListener('change', () => render(select.value));
  </script>
</body>
</html>
"#;
