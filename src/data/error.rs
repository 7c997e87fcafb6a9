use thiserror::Error;

/// Failures building or exchanging a weapon table. Lookup misses are not errors; see
/// `WeaponTable::get`.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate weapon name '{0}'")]
    DuplicateWeapon(String),

    #[error("weapon '{name}' has an empty {field}")]
    IncompleteEntry { name: String, field: &'static str },

    #[error("unknown weapon class '{0}'")]
    UnknownClass(String),

    #[error("unknown export format '{0}' (expected json, yaml or csv)")]
    UnknownFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
