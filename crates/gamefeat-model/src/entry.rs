use std::collections::BTreeMap;

use crate::AppId;

/// One display-oriented record per game, consumed by picker UIs.
///
/// Every scalar is optional: a missing raw cell stays missing here, and the
/// presentation layer decides how to render the gap. `genres` is the only
/// field run through the list parser before it lands in the catalog.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CanonicalEntry {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub metacritic_score: Option<f64>,
    pub user_score: Option<f64>,
    pub positive: Option<i64>,
    pub negative: Option<i64>,
    pub genres: Option<Vec<String>>,
}

impl CanonicalEntry {
    /// Render the picker label: name, identifier, price ("Free" at zero)
    /// and a Metacritic suffix when a score is present.
    pub fn display_label(&self, id: &AppId) -> String {
        let name = self.name.as_deref().unwrap_or("Unknown");
        let price = self.price.unwrap_or(0.0);
        let price_str = if price == 0.0 {
            "Free".to_string()
        } else {
            format!("${price:.2}")
        };
        match self.metacritic_score {
            Some(score) if score > 0.0 => {
                format!("{name} (ID: {id}) - {price_str} | MC {score:.0}")
            }
            _ => format!("{name} (ID: {id}) - {price_str}"),
        }
    }
}

/// The UI-facing lookup: one entry per identifier.
///
/// Rebuilt wholesale on every load and never partially mutated afterwards;
/// a reload swaps in a whole new catalog.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    entries: BTreeMap<AppId, CanonicalEntry>,
}

impl Catalog {
    /// Insert an entry, replacing any previous entry under the same id.
    /// Returns `true` when an existing entry was overwritten.
    pub fn insert(&mut self, id: AppId, entry: CanonicalEntry) -> bool {
        self.entries.insert(id, entry).is_some()
    }

    pub fn get(&self, id: &AppId) -> Option<&CanonicalEntry> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &AppId> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AppId, &CanonicalEntry)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_for_priced_game_with_score() {
        let entry = CanonicalEntry {
            name: Some("Half-Life 2".to_string()),
            price: Some(9.99),
            metacritic_score: Some(96.0),
            ..CanonicalEntry::default()
        };
        let label = entry.display_label(&AppId::new("220"));
        assert_eq!(label, "Half-Life 2 (ID: 220) - $9.99 | MC 96");
    }

    #[test]
    fn label_for_free_game_without_score() {
        let entry = CanonicalEntry {
            name: Some("Dota 2".to_string()),
            ..CanonicalEntry::default()
        };
        assert_eq!(
            entry.display_label(&AppId::new("570")),
            "Dota 2 (ID: 570) - Free"
        );
    }

    #[test]
    fn insert_reports_overwrites() {
        let mut catalog = Catalog::default();
        let id = AppId::new("10");
        assert!(!catalog.insert(id.clone(), CanonicalEntry::default()));
        assert!(catalog.insert(id, CanonicalEntry::default()));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn entry_serde_round_trip() {
        let entry = CanonicalEntry {
            name: Some("Portal".to_string()),
            price: Some(9.99),
            genres: Some(vec!["Puzzle".to_string()]),
            ..CanonicalEntry::default()
        };
        let json = serde_json::to_string(&entry).expect("serialize entry");
        let round: CanonicalEntry = serde_json::from_str(&json).expect("deserialize entry");
        assert_eq!(round, entry);
    }
}
