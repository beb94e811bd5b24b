//! Menu grouping for the order screen
//!
//! Derived on every read and never written back to the feed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared::models::MenuItem;

use super::snapshot::CatalogSnapshot;

/// Bucket for dishes whose category reference does not resolve
pub const FALLBACK_CATEGORY: &str = "Otro";

/// One heading on the order screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub category: String,
    pub items: Vec<MenuItem>,
}

/// Group dishes by category display name
///
/// Groups come out in lexicographic order of name, dishes inside a group in
/// ascending id. Two categories sharing a display name share a group.
/// `section` restricts the dishes to one routing tag.
pub fn group_menu(catalog: &CatalogSnapshot, section: Option<&str>) -> Vec<MenuGroup> {
    let mut groups: BTreeMap<&str, Vec<MenuItem>> = BTreeMap::new();

    for dish in catalog.dishes.values() {
        if let Some(section) = section {
            if dish.section != section {
                continue;
            }
        }
        let name = catalog
            .category_name(&dish.category_id)
            .unwrap_or(FALLBACK_CATEGORY);
        groups.entry(name).or_default().push(dish.clone());
    }

    groups
        .into_iter()
        .map(|(category, items)| MenuGroup {
            category: category.to_string(),
            items,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn catalog() -> CatalogSnapshot {
        CatalogSnapshot::from_feed(
            &json!({
                "d3": {"nombre_comida": "Cafe", "precio_comida": "1200", "categoria_id": "c2", "seccion": "Cafetería"},
                "d1": {"nombre_comida": "Cazuela", "precio_comida": "6500", "categoria_id": "c1", "seccion": "Cocina"},
                "d2": {"nombre_comida": "Lomo", "precio_comida": "9900", "categoria_id": "c1", "seccion": "Cocina"},
                "d4": {"nombre_comida": "Misterio", "precio_comida": "1", "categoria_id": "borrada", "seccion": "Cocina"},
                "d5": {"nombre_comida": "Sin categoria", "precio_comida": "1", "seccion": "Cocina"}
            }),
            &json!({
                "c1": {"nombre_categoria": "Fondos"},
                "c2": {"nombre_categoria": "Bebidas"}
            }),
            &Value::Null,
        )
    }

    fn ids(group: &MenuGroup) -> Vec<&str> {
        group.items.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_groups_sorted_by_name_with_fallback() {
        let groups = group_menu(&catalog(), None);
        let names: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["Bebidas", "Fondos", "Otro"]);

        assert_eq!(ids(&groups[1]), vec!["d1", "d2"]);
        assert_eq!(ids(&groups[2]), vec!["d4", "d5"]);
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let catalog = catalog();
        let first = group_menu(&catalog, None);
        let second = group_menu(&catalog, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_section_filter() {
        let groups = group_menu(&catalog(), Some("Cafetería"));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, "Bebidas");
        assert_eq!(ids(&groups[0]), vec!["d3"]);

        assert!(group_menu(&catalog(), Some("Bar")).is_empty());
    }

    #[test]
    fn test_categories_with_same_name_merge() {
        let catalog = CatalogSnapshot::from_feed(
            &json!({
                "d1": {"nombre_comida": "A", "precio_comida": "1", "categoria_id": "c1"},
                "d2": {"nombre_comida": "B", "precio_comida": "1", "categoria_id": "c2"}
            }),
            &json!({
                "c1": {"nombre_categoria": "Postres"},
                "c2": {"nombre_categoria": "Postres"}
            }),
            &Value::Null,
        );
        let groups = group_menu(&catalog, None);
        assert_eq!(groups.len(), 1);
        assert_eq!(ids(&groups[0]), vec!["d1", "d2"]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(group_menu(&CatalogSnapshot::default(), None).is_empty());
    }
}
