//! JSON payload builders for the lookup API. Pure functions over the table so they can be
//! tested without a running server.

use serde::Serialize;
use thiserror::Error;

use crate::data::table::WeaponTable;
use crate::data::weapon::{WeaponClass, WeaponEntry};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Weapon not found")]
    NotFound(String),
    #[error("Route not found")]
    RouteNotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound(_) | ApiError::RouteNotFound => 404,
            ApiError::BadRequest(_) => 400,
            ApiError::Serialize(_) => 500,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        ErrorResponse {
            status: "error",
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WeaponItem<'a> {
    pub name: &'a str,
    #[serde(flatten)]
    pub entry: &'a WeaponEntry,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeaponListResponse<'a> {
    pub count: usize,
    pub weapons: Vec<WeaponItem<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassGroup<'a> {
    pub class: WeaponClass,
    pub weapons: Vec<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassListResponse<'a> {
    pub classes: Vec<ClassGroup<'a>>,
}

/// Listing rows in catalog order, restricted to one class when given.
pub fn weapon_items(table: &WeaponTable, class: Option<WeaponClass>) -> Vec<WeaponItem<'_>> {
    match class {
        Some(class) => table
            .by_class(class)
            .map(|(name, entry)| WeaponItem { name, entry })
            .collect(),
        None => table
            .list()
            .map(|(name, entry)| WeaponItem { name, entry })
            .collect(),
    }
}

pub fn health_payload(table: &WeaponTable) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "ammoguide-api",
        "version": env!("CARGO_PKG_VERSION"),
        "weapons": table.len(),
    }))?)
}

/// Full listing, or one class when `class` is given (label or alias, e.g. "Assault Rifle", "ar").
pub fn weapons_payload(table: &WeaponTable, class: Option<&str>) -> Result<String, ApiError> {
    let filter = match class.map(str::trim).filter(|c| !c.is_empty()) {
        Some(raw) => Some(
            raw.parse::<WeaponClass>()
                .map_err(|err| ApiError::BadRequest(err.to_string()))?,
        ),
        None => None,
    };
    let weapons = weapon_items(table, filter);
    Ok(serde_json::to_string_pretty(&WeaponListResponse {
        count: weapons.len(),
        weapons,
    })?)
}

pub fn weapon_payload(table: &WeaponTable, name: &str) -> Result<String, ApiError> {
    let Some(entry) = table.get(name) else {
        log::debug!("weapon lookup miss: '{name}'");
        return Err(ApiError::NotFound(name.to_string()));
    };
    Ok(serde_json::to_string_pretty(&WeaponItem { name, entry })?)
}

pub fn classes_payload(table: &WeaponTable) -> Result<String, ApiError> {
    let classes = table
        .classes()
        .into_iter()
        .map(|class| ClassGroup {
            class,
            weapons: table.by_class(class).map(|(name, _)| name).collect(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&ClassListResponse { classes })?)
}

pub fn error_payload(err: &ApiError) -> String {
    serde_json::to_string_pretty(&ErrorResponse::from(err)).unwrap_or_else(|_| {
        "{\n  \"status\": \"error\",\n  \"message\": \"Unknown error\"\n}".to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> std::sync::Arc<WeaponTable> {
        WeaponTable::load().expect("built-in catalog should load")
    }

    #[test]
    fn unknown_class_is_bad_request() {
        let err = weapons_payload(&table(), Some("shotgun")).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(error_payload(&err).contains("unknown weapon class"));
    }

    #[test]
    fn blank_class_lists_everything() {
        let table = table();
        let payload: serde_json::Value =
            serde_json::from_str(&weapons_payload(&table, Some(" ")).expect("payload"))
                .expect("valid json");
        assert_eq!(payload["count"], table.len());
    }

    #[test]
    fn route_not_found_uses_shared_error_body() {
        let err = ApiError::RouteNotFound;
        assert_eq!(err.status_code(), 404);
        let payload: serde_json::Value =
            serde_json::from_str(&error_payload(&err)).expect("valid json");
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["message"], "Route not found");
    }

    #[test]
    fn missing_weapon_is_not_found() {
        let err = weapon_payload(&table(), "NONEXISTENT-WEAPON").unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert!(error_payload(&err).contains("Weapon not found"));
    }
}
