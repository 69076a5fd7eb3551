//! Core types for the selector state.

use crate::error::{Result, WidgetError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Lowest quantity the view layer lets the user reach.
pub const MIN_QUANTITY: i64 = 0;

/// Highest quantity the view layer lets the user reach.
pub const MAX_QUANTITY: i64 = 10;

/// Identifier of a catalog item. Always positive.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = WidgetError;

    /// Parse the string form a dropdown hands back (e.g. `"3"`).
    ///
    /// Integral numeric spellings such as `"3.0"` or `"1e0"` are accepted.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<u64>() {
            if n > 0 {
                return Ok(ItemId(n));
            }
        } else if let Ok(f) = trimmed.parse::<f64>() {
            if f.fract() == 0.0 && (1.0..=u64::MAX as f64).contains(&f) {
                return Ok(ItemId(f as u64));
            }
        }
        Err(WidgetError::InvalidItemId(s.to_string()))
    }
}

/// A selectable item with its unit price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    pub unit_value: f64,
}

impl CatalogItem {
    pub fn new(id: u64, name: impl Into<String>, unit_value: f64) -> Self {
        Self {
            id: ItemId(id),
            name: name.into(),
            unit_value,
        }
    }
}

/// Fixed, ordered set of selectable items.
///
/// Guaranteed non-empty with unique, positive ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CatalogItem>", into = "Vec<CatalogItem>")]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Build a catalog, rejecting empty input and bad or repeated ids.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(WidgetError::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.0 == 0 {
                return Err(WidgetError::InvalidItemId(item.id.to_string()));
            }
            if !seen.insert(item.id) {
                return Err(WidgetError::DuplicateItem(item.id));
            }
        }

        Ok(Self { items })
    }

    /// Look up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// First item in catalog order (the default selection).
    pub fn first(&self) -> &CatalogItem {
        // Non-empty by construction.
        &self.items[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            items: vec![
                CatalogItem::new(1, "First", 10.0),
                CatalogItem::new(2, "Second", 50.0),
                CatalogItem::new(3, "Third", 200.0),
            ],
        }
    }
}

impl TryFrom<Vec<CatalogItem>> for Catalog {
    type Error = WidgetError;

    fn try_from(items: Vec<CatalogItem>) -> Result<Self> {
        Catalog::new(items)
    }
}

impl From<Catalog> for Vec<CatalogItem> {
    fn from(catalog: Catalog) -> Self {
        catalog.items
    }
}

/// Snapshot of the selector state.
///
/// `total`, `decrement_allowed` and `increment_allowed` are derived from
/// `quantity`, `selected` and `catalog`. They stay `None` until the first
/// `Initialize` transition and are only ever written by the reducer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetState {
    pub(crate) catalog: Catalog,
    pub(crate) quantity: i64,
    #[serde(rename = "selectedId")]
    pub(crate) selected: ItemId,
    pub(crate) total: Option<f64>,
    pub(crate) decrement_allowed: Option<bool>,
    pub(crate) increment_allowed: Option<bool>,
}

impl WidgetState {
    /// Pre-mount state: derived fields absent.
    pub(crate) fn new(catalog: Catalog, quantity: i64, selected: ItemId) -> Self {
        Self {
            catalog,
            quantity,
            selected,
            total: None,
            decrement_allowed: None,
            increment_allowed: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn selected(&self) -> ItemId {
        self.selected
    }

    pub fn total(&self) -> Option<f64> {
        self.total
    }

    pub fn decrement_allowed(&self) -> Option<bool> {
        self.decrement_allowed
    }

    pub fn increment_allowed(&self) -> Option<bool> {
        self.increment_allowed
    }

    /// The currently selected catalog item.
    pub fn selected_item(&self) -> Result<&CatalogItem> {
        self.catalog
            .get(self.selected)
            .ok_or(WidgetError::UnknownItem(self.selected))
    }

    /// True once `Initialize` has populated the derived fields.
    pub fn is_initialized(&self) -> bool {
        self.total.is_some()
            && self.decrement_allowed.is_some()
            && self.increment_allowed.is_some()
    }

    /// Serialize the snapshot for a host view layer.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| WidgetError::Serialization(e.to_string()))
    }
}

/// Dispatch counters for a store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Successful transitions.
    pub dispatched: u64,
    /// Dispatches that failed and left the state untouched.
    pub rejected: u64,
    /// Live subscribers.
    pub subscribers: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_item_id() {
        assert_eq!("3".parse::<ItemId>().unwrap(), ItemId(3));
        assert_eq!(" 12 ".parse::<ItemId>().unwrap(), ItemId(12));
        assert!(matches!(
            "0".parse::<ItemId>(),
            Err(WidgetError::InvalidItemId(_))
        ));
        assert!(matches!(
            "abc".parse::<ItemId>(),
            Err(WidgetError::InvalidItemId(_))
        ));
        assert!(matches!(
            "-1".parse::<ItemId>(),
            Err(WidgetError::InvalidItemId(_))
        ));
    }

    #[test]
    fn test_parse_item_id_numeric_forms() {
        assert_eq!("3.0".parse::<ItemId>().unwrap(), ItemId(3));
        assert_eq!("1e0".parse::<ItemId>().unwrap(), ItemId(1));
        assert_eq!("2E1".parse::<ItemId>().unwrap(), ItemId(20));

        for bad in ["2.5", "0.0", "-3.0", "NaN", "inf", "", "1e400"] {
            assert!(
                matches!(bad.parse::<ItemId>(), Err(WidgetError::InvalidItemId(_))),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_catalog_rejects_empty() {
        assert!(matches!(Catalog::new(vec![]), Err(WidgetError::EmptyCatalog)));
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let result = Catalog::new(vec![
            CatalogItem::new(1, "a", 1.0),
            CatalogItem::new(1, "b", 2.0),
        ]);
        assert!(matches!(result, Err(WidgetError::DuplicateItem(ItemId(1)))));
    }

    #[test]
    fn test_catalog_rejects_zero_id() {
        let result = Catalog::new(vec![CatalogItem::new(0, "zero", 1.0)]);
        assert!(matches!(result, Err(WidgetError::InvalidItemId(_))));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.first().id, ItemId(1));
        assert_eq!(catalog.get(ItemId(3)).unwrap().unit_value, 200.0);
        assert!(!catalog.contains(ItemId(4)));
    }

    #[test]
    fn test_catalog_deserialize_validates() {
        let ok: Catalog =
            serde_json::from_value(json!([{"id": 7, "name": "Seven", "unitValue": 1.5}])).unwrap();
        assert_eq!(ok.first().name, "Seven");

        let dup = serde_json::from_value::<Catalog>(json!([
            {"id": 1, "name": "a", "unitValue": 1.0},
            {"id": 1, "name": "b", "unitValue": 2.0}
        ]));
        assert!(dup.is_err());
    }

    #[test]
    fn test_pre_mount_state_serializes_camel_case() {
        let state = WidgetState::new(Catalog::default(), 1, ItemId(1));
        assert!(!state.is_initialized());

        let value = state.to_json().unwrap();
        assert_eq!(value["quantity"], 1);
        assert_eq!(value["selectedId"], 1);
        assert!(value["total"].is_null());
        assert_eq!(value["catalog"][1]["unitValue"], 50.0);
    }
}
