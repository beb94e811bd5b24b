//! Typed view of the catalog feed

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::{
    Category, CategoryRecord, MenuItem, MenuItemRecord, Section, SectionRecord,
};

/// Point-in-time copy of `menu`, `categorias` and `secciones`
///
/// Maps are keyed by id, so iteration is ascending id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogSnapshot {
    pub dishes: BTreeMap<String, MenuItem>,
    pub categories: BTreeMap<String, Category>,
    pub sections: BTreeMap<String, Section>,
}

impl CatalogSnapshot {
    /// Decode raw feed snapshots; malformed records are skipped
    pub fn from_feed(menu: &Value, categories: &Value, sections: &Value) -> Self {
        Self {
            dishes: decode_children::<MenuItemRecord>(menu, "menu")
                .map(|(id, record)| (id.clone(), MenuItem::from_record(id, record)))
                .collect(),
            categories: decode_children::<CategoryRecord>(categories, "categorias")
                .map(|(id, record)| (id.clone(), Category::from_record(id, record)))
                .collect(),
            sections: decode_children::<SectionRecord>(sections, "secciones")
                .map(|(id, record)| (id.clone(), Section::from_record(id, record)))
                .collect(),
        }
    }

    pub fn dish(&self, id: &str) -> Option<&MenuItem> {
        self.dishes.get(id)
    }

    /// Display name of a category, `None` when the reference dangles
    pub fn category_name(&self, id: &str) -> Option<&str> {
        self.categories.get(id).map(|c| c.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty() && self.categories.is_empty() && self.sections.is_empty()
    }
}

fn decode_children<'a, T: DeserializeOwned>(
    node: &'a Value,
    resource: &'static str,
) -> impl Iterator<Item = (String, T)> + 'a {
    node.as_object()
        .into_iter()
        .flat_map(|map| map.iter())
        .filter_map(move |(id, raw)| match serde_json::from_value::<T>(raw.clone()) {
            Ok(record) => Some((id.clone(), record)),
            Err(e) => {
                tracing::warn!(resource, id = %id, error = %e, "Skipping malformed catalog record");
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_all_three_resources() {
        let snapshot = CatalogSnapshot::from_feed(
            &json!({"d1": {"nombre_comida": "Cazuela", "precio_comida": "6500", "categoria_id": "c1", "seccion": "Cocina"}}),
            &json!({"c1": {"nombre_categoria": "Fondos"}}),
            &json!({"s1": {"nombre_seccion": "Cocina"}}),
        );

        assert_eq!(snapshot.dish("d1").unwrap().name, "Cazuela");
        assert_eq!(snapshot.category_name("c1"), Some("Fondos"));
        assert_eq!(snapshot.category_name("c9"), None);
        assert_eq!(snapshot.sections["s1"].name, "Cocina");
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let snapshot = CatalogSnapshot::from_feed(
            &json!({
                "d1": {"nombre_comida": "Pan", "precio_comida": "500"},
                "d2": {"nombre_comida": "Sin precio"},
                "d3": {"nombre_comida": "Caro", "precio_comida": "mucho"},
                "d4": "not an object"
            }),
            &Value::Null,
            &json!([1, 2]),
        );

        assert_eq!(snapshot.dishes.len(), 1);
        assert!(snapshot.dish("d1").is_some());
        assert!(snapshot.categories.is_empty());
        assert!(snapshot.sections.is_empty());
    }

    #[test]
    fn test_empty_feed() {
        let snapshot = CatalogSnapshot::from_feed(&Value::Null, &Value::Null, &Value::Null);
        assert!(snapshot.is_empty());
    }
}
