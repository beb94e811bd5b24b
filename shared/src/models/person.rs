//! Person Model (Persona)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A person seated at a table, with their dish selections and notes
///
/// `selections` never holds a zero quantity: an entry that reaches zero
/// is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    /// Menu item id -> quantity
    #[serde(rename = "seleccionados", default)]
    pub selections: BTreeMap<String, u32>,
    /// Free-text notes, in the order they were added
    #[serde(rename = "detalles", default)]
    pub details: Vec<String>,
}

impl Person {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            selections: BTreeMap::new(),
            details: Vec::new(),
        }
    }

    /// Quantity selected for a menu item (0 when absent)
    pub fn quantity_of(&self, menu_item_id: &str) -> u32 {
        self.selections.get(menu_item_id).copied().unwrap_or(0)
    }

    /// Total number of dishes selected
    pub fn total_items(&self) -> u32 {
        self.selections.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_wire_format() {
        let json = r#"{"id":"p1","seleccionados":{"d1":2},"detalles":["sin sal"]}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.quantity_of("d1"), 2);
        assert_eq!(person.quantity_of("d2"), 0);
        assert_eq!(person.details, vec!["sin sal".to_string()]);
    }

    #[test]
    fn test_person_missing_collections_default_empty() {
        // The feed drops empty maps and arrays
        let person: Person = serde_json::from_str(r#"{"id":"p2"}"#).unwrap();
        assert!(person.selections.is_empty());
        assert!(person.details.is_empty());
        assert_eq!(person.total_items(), 0);
    }
}
