//! Interchange documents for the weapon table: JSON and YAML (reloadable), CSV (flat listing).

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::error::CatalogError;
use crate::data::table::WeaponTable;
use crate::data::weapon::WeaponEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(CatalogError::UnknownFormat(s.to_string())),
        }
    }
}

/// One named record in an interchange document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedWeapon {
    pub name: String,
    #[serde(flatten)]
    pub entry: WeaponEntry,
}

/// Document shape: `{ "weapons": [ { "name": ..., ...entry fields } ] }`. A list keeps
/// catalog order across formats that don't preserve map order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponDocument {
    pub weapons: Vec<NamedWeapon>,
}

impl WeaponDocument {
    pub fn from_table(table: &WeaponTable) -> Self {
        WeaponDocument {
            weapons: table
                .list()
                .map(|(name, entry)| NamedWeapon {
                    name: name.to_string(),
                    entry: entry.clone(),
                })
                .collect(),
        }
    }

    pub fn into_table(self) -> Result<WeaponTable, CatalogError> {
        WeaponTable::from_entries(self.weapons.into_iter().map(|w| (w.name, w.entry)))
    }
}

pub fn to_json(table: &WeaponTable) -> Result<String, CatalogError> {
    Ok(serde_json::to_string_pretty(&WeaponDocument::from_table(table))?)
}

pub fn from_json(raw: &str) -> Result<WeaponTable, CatalogError> {
    let doc: WeaponDocument = serde_json::from_str(raw)?;
    doc.into_table()
}

pub fn to_yaml(table: &WeaponTable) -> Result<String, CatalogError> {
    Ok(serde_yaml::to_string(&WeaponDocument::from_table(table))?)
}

pub fn from_yaml(raw: &str) -> Result<WeaponTable, CatalogError> {
    let doc: WeaponDocument = serde_yaml::from_str(raw)?;
    doc.into_table()
}

pub const CSV_HEADER: [&str; 9] = [
    "name",
    "weapon_class",
    "badge",
    "ttk_image",
    "range_image_1hs",
    "range_image_2hs",
    "range_image_3hs",
    "summary",
    "verdict",
];

/// Flat one-row-per-weapon listing. Recommendations beyond the verdict line are not included.
pub fn to_csv(table: &WeaponTable) -> Result<String, CatalogError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for (name, entry) in table.list() {
        writer.write_record([
            name,
            entry.weapon_class.label(),
            entry.badge.css_class(),
            entry.ttk_image.as_str(),
            entry.range_image_1hs.as_str(),
            entry.range_image_2hs.as_str(),
            entry.range_image_3hs.as_deref().unwrap_or(""),
            entry.summary().unwrap_or(""),
            entry.verdict().unwrap_or(""),
        ])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| CatalogError::Io(err.into_error()))?;
    String::from_utf8(bytes).map_err(|err| CatalogError::Io(std::io::Error::other(err)))
}

pub fn render(table: &WeaponTable, format: ExportFormat) -> Result<String, CatalogError> {
    match format {
        ExportFormat::Json => to_json(table),
        ExportFormat::Yaml => to_yaml(table),
        ExportFormat::Csv => to_csv(table),
    }
}

pub fn write_export(
    table: &WeaponTable,
    format: ExportFormat,
    path: impl AsRef<Path>,
) -> Result<(), CatalogError> {
    let path = path.as_ref();
    let payload = render(table, format)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, payload)?;
    log::info!("exported {} weapons to {}", table.len(), path.display());
    Ok(())
}
