//! Weapon display record and the small vocabularies attached to it.
//! Field names on the wire match what the lookup page reads (camelCase).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::error::CatalogError;

pub const TTK_ANALYSIS_DIR: &str = "visualizations/TTK_ANALYSIS";
pub const INDIVIDUAL_WEAPONS_DIR: &str = "visualizations/INDIVIDUAL_WEAPONS";

/// Weapon class grouping. The label doubles as the TTK chart directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponClass {
    #[serde(rename = "Assault Rifle")]
    AssaultRifle,
    #[serde(rename = "Carbine")]
    Carbine,
    #[serde(rename = "LMG")]
    Lmg,
    #[serde(rename = "SMG")]
    Smg,
}

impl WeaponClass {
    pub const ALL: [WeaponClass; 4] = [
        WeaponClass::AssaultRifle,
        WeaponClass::Carbine,
        WeaponClass::Lmg,
        WeaponClass::Smg,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WeaponClass::AssaultRifle => "Assault Rifle",
            WeaponClass::Carbine => "Carbine",
            WeaponClass::Lmg => "LMG",
            WeaponClass::Smg => "SMG",
        }
    }
}

impl fmt::Display for WeaponClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WeaponClass {
    type Err = CatalogError;

    /// Accepts the display label or a compact alias ("ar", "assault_rifle"), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|ch| ch.is_ascii_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "assaultrifle" | "ar" => Ok(WeaponClass::AssaultRifle),
            "carbine" => Ok(WeaponClass::Carbine),
            "lmg" => Ok(WeaponClass::Lmg),
            "smg" => Ok(WeaponClass::Smg),
            _ => Err(CatalogError::UnknownClass(s.to_string())),
        }
    }
}

/// Ammo badge shown next to a recommendation. Serialized as its CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmmoBadge {
    #[serde(rename = "badge-hp")]
    HollowPoint,
    #[serde(rename = "badge-synthetic")]
    Synthetic,
    #[serde(rename = "badge-base")]
    Base,
}

impl AmmoBadge {
    pub fn css_class(self) -> &'static str {
        match self {
            AmmoBadge::HollowPoint => "badge-hp",
            AmmoBadge::Synthetic => "badge-synthetic",
            AmmoBadge::Base => "badge-base",
        }
    }
}

impl fmt::Display for AmmoBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// Display metadata for one weapon. Recommendation strings carry inline markup and are
/// passed through untouched; the renderer decides whether to trust them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponEntry {
    pub weapon_class: WeaponClass,
    pub badge: AmmoBadge,
    pub ttk_image: String,
    #[serde(rename = "rangeImage1HS")]
    pub range_image_1hs: String,
    #[serde(rename = "rangeImage2HS")]
    pub range_image_2hs: String,
    #[serde(
        rename = "rangeImage3HS",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub range_image_3hs: Option<String>,
    pub recommendations: Vec<String>,
}

impl WeaponEntry {
    /// Range chart path for `headshots` (1..=3). None when the entry has no such chart.
    pub fn range_image(&self, headshots: u8) -> Option<&str> {
        match headshots {
            1 => Some(self.range_image_1hs.as_str()),
            2 => Some(self.range_image_2hs.as_str()),
            3 => self.range_image_3hs.as_deref(),
            _ => None,
        }
    }

    /// All range chart paths present, in headshot order.
    pub fn range_images(&self) -> Vec<(u8, &str)> {
        (1..=3)
            .filter_map(|k| self.range_image(k).map(|path| (k, path)))
            .collect()
    }

    pub fn summary(&self) -> Option<&str> {
        self.recommendations.first().map(String::as_str)
    }

    pub fn verdict(&self) -> Option<&str> {
        self.recommendations.get(1).map(String::as_str)
    }

    /// First mandatory field that is empty, if any. Checks shape only; markup is not inspected.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.ttk_image.is_empty() {
            Some("ttkImage")
        } else if self.range_image_1hs.is_empty() {
            Some("rangeImage1HS")
        } else if self.range_image_2hs.is_empty() {
            Some("rangeImage2HS")
        } else if self.range_image_3hs.as_deref() == Some("") {
            Some("rangeImage3HS")
        } else if self.recommendations.is_empty() || self.recommendations.iter().any(String::is_empty) {
            Some("recommendations")
        } else {
            None
        }
    }
}

pub fn ttk_image_path(class: WeaponClass, name: &str) -> String {
    format!("{TTK_ANALYSIS_DIR}/{}/{name}.png", class.label())
}

pub fn range_image_path(name: &str, headshots: u8) -> String {
    format!("{INDIVIDUAL_WEAPONS_DIR}/{name}_{headshots}HS.png")
}
