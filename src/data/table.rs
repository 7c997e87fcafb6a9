//! Read-only weapon lookup table.
//! Built once (from the catalog or an interchange document) and shared via Arc; no mutation after.

use std::collections::HashMap;
use std::sync::Arc;

use crate::data::catalog::builtin_entries;
use crate::data::error::CatalogError;
use crate::data::weapon::{WeaponClass, WeaponEntry};

/// Weapon name -> display record, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponTable {
    /// All entries in insertion order.
    entries: Vec<(String, WeaponEntry)>,
    /// Exact name -> index into `entries`.
    by_name: HashMap<String, usize>,
}

impl WeaponTable {
    /// Build the built-in catalog table. Returns an Arc so it can be injected into handlers.
    pub fn load() -> Result<Arc<WeaponTable>, CatalogError> {
        let table = Self::from_entries(builtin_entries())?;
        log::debug!("weapon table loaded: {} entries", table.len());
        Ok(Arc::new(table))
    }

    /// Build a table from (name, entry) pairs. Names must be unique and every entry must carry
    /// its mandatory chart paths and at least one non-empty recommendation.
    pub fn from_entries<I>(entries: I) -> Result<WeaponTable, CatalogError>
    where
        I: IntoIterator<Item = (String, WeaponEntry)>,
    {
        let mut table = WeaponTable {
            entries: Vec::new(),
            by_name: HashMap::new(),
        };
        for (name, entry) in entries {
            if table.by_name.contains_key(&name) {
                return Err(CatalogError::DuplicateWeapon(name));
            }
            if let Some(field) = entry.missing_field() {
                return Err(CatalogError::IncompleteEntry { name, field });
            }
            table.by_name.insert(name.clone(), table.entries.len());
            table.entries.push((name, entry));
        }
        Ok(table)
    }

    /// Exact-match lookup. No case folding or punctuation normalization.
    pub fn get(&self, name: &str) -> Option<&WeaponEntry> {
        self.by_name.get(name).map(|&idx| &self.entries[idx].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All (name, entry) pairs in catalog order. Can be called any number of times.
    pub fn list(&self) -> impl Iterator<Item = (&str, &WeaponEntry)> + '_ {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn by_class(&self, class: WeaponClass) -> impl Iterator<Item = (&str, &WeaponEntry)> + '_ {
        self.list().filter(move |(_, entry)| entry.weapon_class == class)
    }

    /// Classes present in the table, in order of first appearance.
    pub fn classes(&self) -> Vec<WeaponClass> {
        let mut classes = Vec::new();
        for (_, entry) in self.list() {
            if !classes.contains(&entry.weapon_class) {
                classes.push(entry.weapon_class);
            }
        }
        classes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::weapon::AmmoBadge;

    fn entry(class: WeaponClass) -> WeaponEntry {
        WeaponEntry {
            weapon_class: class,
            badge: AmmoBadge::Base,
            ttk_image: "ttk.png".to_string(),
            range_image_1hs: "1.png".to_string(),
            range_image_2hs: "2.png".to_string(),
            range_image_3hs: None,
            recommendations: vec!["ok".to_string()],
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let result = WeaponTable::from_entries(vec![
            ("X".to_string(), entry(WeaponClass::Smg)),
            ("X".to_string(), entry(WeaponClass::Lmg)),
        ]);
        match result {
            Err(CatalogError::DuplicateWeapon(name)) => assert_eq!(name, "X"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn incomplete_entries_are_rejected() {
        let mut no_chart = entry(WeaponClass::Carbine);
        no_chart.range_image_2hs.clear();
        match WeaponTable::from_entries(vec![("Y".to_string(), no_chart)]) {
            Err(CatalogError::IncompleteEntry { name, field }) => {
                assert_eq!(name, "Y");
                assert_eq!(field, "rangeImage2HS");
            }
            other => panic!("expected incomplete entry error, got {other:?}"),
        }

        let mut no_recs = entry(WeaponClass::Carbine);
        no_recs.recommendations.clear();
        assert!(matches!(
            WeaponTable::from_entries(vec![("Z".to_string(), no_recs)]),
            Err(CatalogError::IncompleteEntry { field: "recommendations", .. })
        ));
    }

    #[test]
    fn lookup_is_exact_match() {
        let table =
            WeaponTable::from_entries(vec![("SOR-556 MK2".to_string(), entry(WeaponClass::AssaultRifle))])
                .expect("single entry should build");
        assert!(table.get("SOR-556 MK2").is_some());
        assert!(table.get("sor-556 mk2").is_none());
        assert!(table.get("SOR-556MK2").is_none());
        assert!(table.get("SOR-556 MK2 ").is_none());
    }

    #[test]
    fn empty_table_lists_nothing() {
        let table = WeaponTable::from_entries(Vec::new()).expect("empty table should build");
        assert!(table.is_empty());
        assert_eq!(table.list().count(), 0);
        assert!(table.classes().is_empty());
    }

    #[test]
    fn classes_follow_first_appearance() {
        let table = WeaponTable::from_entries(vec![
            ("A".to_string(), entry(WeaponClass::Smg)),
            ("B".to_string(), entry(WeaponClass::Carbine)),
            ("C".to_string(), entry(WeaponClass::Smg)),
        ])
        .expect("table should build");
        assert_eq!(table.classes(), vec![WeaponClass::Smg, WeaponClass::Carbine]);
        let smgs: Vec<&str> = table.by_class(WeaponClass::Smg).map(|(n, _)| n).collect();
        assert_eq!(smgs, vec!["A", "C"]);
    }
}
