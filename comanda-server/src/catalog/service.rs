//! Catalog Service - menu, categories and sections over the document feed
//!
//! The feed is the only copy; every read decodes a fresh snapshot so
//! admin edits show up on the next request without cache invalidation.

use serde_json::{Map, Value};
use shared::error::ErrorCode;
use shared::feed::{CATEGORIES_PATH, MENU_PATH, SECTIONS_PATH};
use shared::models::{
    Category, CategoryCreate, CategoryRecord, CategoryUpdate, MenuItem, MenuItemCreate,
    MenuItemRecord, MenuItemUpdate, Section, SectionCreate, SectionRecord,
};

use super::grouping::{MenuGroup, group_menu};
use super::snapshot::CatalogSnapshot;
use crate::feed::FeedStore;
use crate::feed::path::validate_key;
use crate::utils::validation::{
    MAX_NAME_LEN, parse_price, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Unified catalog service
#[derive(Clone)]
pub struct CatalogService {
    feed: FeedStore,
}

impl std::fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogService")
            .field("menu_version", &self.feed.version(MENU_PATH))
            .field("categories_version", &self.feed.version(CATEGORIES_PATH))
            .finish()
    }
}

impl CatalogService {
    pub fn new(feed: FeedStore) -> Self {
        Self { feed }
    }

    /// Decode the current catalog
    pub fn snapshot(&self) -> AppResult<CatalogSnapshot> {
        Ok(CatalogSnapshot::from_feed(
            &self.feed.get(MENU_PATH)?,
            &self.feed.get(CATEGORIES_PATH)?,
            &self.feed.get(SECTIONS_PATH)?,
        ))
    }

    /// Menu grouped by category name, optionally for one section
    pub fn grouped_menu(&self, section: Option<&str>) -> AppResult<Vec<MenuGroup>> {
        Ok(group_menu(&self.snapshot()?, section))
    }

    // =========================================================================
    // Menu
    // =========================================================================

    pub fn list_menu(&self) -> AppResult<Vec<MenuItem>> {
        Ok(self.snapshot()?.dishes.into_values().collect())
    }

    pub fn get_menu_item(&self, id: &str) -> AppResult<MenuItem> {
        let raw = self.feed.get(&record_path(MENU_PATH, id, menu_item_not_found)?)?;
        if raw.is_null() {
            return Err(menu_item_not_found(id));
        }
        let record: MenuItemRecord = serde_json::from_value(raw).map_err(|e| {
            AppError::with_message(ErrorCode::InvalidFormat, format!("Menu item {id} is malformed: {e}"))
        })?;
        Ok(MenuItem::from_record(id, record))
    }

    /// Create a dish; name and price are mandatory
    pub fn create_menu_item(&self, data: MenuItemCreate) -> AppResult<MenuItem> {
        if data.name.trim().is_empty() || data.price.trim().is_empty() {
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                "Please fill in all fields",
            ));
        }
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&data.section, "section", MAX_NAME_LEN)?;
        let price = parse_price(&data.price)?;

        let record = MenuItemRecord {
            name: data.name.trim().to_string(),
            price,
            category_id: data.category_id.unwrap_or_default(),
            section: data.section.map(|s| s.trim().to_string()).unwrap_or_default(),
        };
        let id = self.feed.push(MENU_PATH, to_feed_value(&record)?)?;
        tracing::info!(id = %id, name = %record.name, "Menu item created");
        Ok(MenuItem::from_record(id, record))
    }

    pub fn update_menu_item(&self, id: &str, data: MenuItemUpdate) -> AppResult<MenuItem> {
        let mut item = self.get_menu_item(id)?;

        if let Some(name) = data.name {
            validate_required_text(&name, "name", MAX_NAME_LEN)?;
            item.name = name.trim().to_string();
        }
        if let Some(price) = data.price {
            item.price = parse_price(&price)?;
        }
        if let Some(category_id) = data.category_id {
            item.category_id = category_id;
        }
        if let Some(section) = data.section {
            validate_optional_text(&Some(section.clone()), "section", MAX_NAME_LEN)?;
            item.section = section.trim().to_string();
        }

        self.feed
            .set(&format!("{MENU_PATH}/{id}"), to_feed_value(&item.to_record())?)?;
        tracing::info!(id = %id, "Menu item updated");
        Ok(item)
    }

    pub fn delete_menu_item(&self, id: &str) -> AppResult<()> {
        let path = record_path(MENU_PATH, id, menu_item_not_found)?;
        if self.feed.get(&path)?.is_null() {
            return Err(menu_item_not_found(id));
        }
        self.feed.remove(&path)?;
        tracing::info!(id = %id, "Menu item deleted");
        Ok(())
    }

    // =========================================================================
    // Categories
    // =========================================================================

    pub fn list_categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.snapshot()?.categories.into_values().collect())
    }

    pub fn create_category(&self, data: CategoryCreate) -> AppResult<Category> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        let record = CategoryRecord {
            name: data.name.trim().to_string(),
        };
        let id = self.feed.push(CATEGORIES_PATH, to_feed_value(&record)?)?;
        tracing::info!(id = %id, name = %record.name, "Category created");
        Ok(Category::from_record(id, record))
    }

    /// Rename a category; dishes keep pointing at the same id
    pub fn update_category(&self, id: &str, data: CategoryUpdate) -> AppResult<Category> {
        let path = record_path(CATEGORIES_PATH, id, category_not_found)?;
        let current = self.feed.get(&path)?;
        if current.is_null() {
            return Err(category_not_found(id));
        }
        let Some(name) = data.name else {
            let record: CategoryRecord = serde_json::from_value(current).map_err(|e| {
                AppError::with_message(ErrorCode::InvalidFormat, format!("Category {id} is malformed: {e}"))
            })?;
            return Ok(Category::from_record(id, record));
        };
        validate_required_text(&name, "name", MAX_NAME_LEN)?;

        let name = name.trim().to_string();
        let mut fields = Map::new();
        fields.insert("nombre_categoria".into(), Value::String(name.clone()));
        self.feed.update(&path, fields)?;
        tracing::info!(id = %id, name = %name, "Category renamed");
        Ok(Category {
            id: id.to_string(),
            name,
        })
    }

    /// Delete a category; its dishes fall into the fallback group
    pub fn delete_category(&self, id: &str) -> AppResult<()> {
        let path = record_path(CATEGORIES_PATH, id, category_not_found)?;
        if self.feed.get(&path)?.is_null() {
            return Err(category_not_found(id));
        }
        self.feed.remove(&path)?;
        tracing::info!(id = %id, "Category deleted");
        Ok(())
    }

    // =========================================================================
    // Sections
    // =========================================================================

    pub fn list_sections(&self) -> AppResult<Vec<Section>> {
        Ok(self.snapshot()?.sections.into_values().collect())
    }

    pub fn create_section(&self, data: SectionCreate) -> AppResult<Section> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        let record = SectionRecord {
            name: data.name.trim().to_string(),
        };
        let id = self.feed.push(SECTIONS_PATH, to_feed_value(&record)?)?;
        tracing::info!(id = %id, name = %record.name, "Section created");
        Ok(Section::from_record(id, record))
    }

    pub fn delete_section(&self, id: &str) -> AppResult<()> {
        let path = record_path(SECTIONS_PATH, id, section_not_found)?;
        if self.feed.get(&path)?.is_null() {
            return Err(section_not_found(id));
        }
        self.feed.remove(&path)?;
        tracing::info!(id = %id, "Section deleted");
        Ok(())
    }
}

fn to_feed_value<T: serde::Serialize>(record: &T) -> AppResult<Value> {
    serde_json::to_value(record).map_err(|e| AppError::internal(format!("Failed to encode record: {e}")))
}

/// Path of one record; an id that is not a single feed key names no record
fn record_path(base: &str, id: &str, not_found: fn(&str) -> AppError) -> AppResult<String> {
    validate_key(id).map_err(|_| not_found(id))?;
    Ok(format!("{base}/{id}"))
}

fn menu_item_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::MenuItemNotFound, format!("Menu item {id} not found"))
        .with_detail("id", id)
}

fn category_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::CategoryNotFound, format!("Category {id} not found"))
        .with_detail("id", id)
}

fn section_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::SectionNotFound, format!("Section {id} not found"))
        .with_detail("id", id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn service() -> CatalogService {
        CatalogService::new(FeedStore::new())
    }

    fn dish(name: &str, price: &str, category: Option<&str>, section: &str) -> MenuItemCreate {
        MenuItemCreate {
            name: name.into(),
            price: price.into(),
            category_id: category.map(String::from),
            section: Some(section.into()),
        }
    }

    #[test]
    fn test_create_menu_item_writes_feed_record() {
        let catalog = service();
        let item = catalog
            .create_menu_item(dish("Cazuela", "6500.50", Some("c1"), "Cocina"))
            .unwrap();

        assert_eq!(item.id.len(), 20);
        let raw = catalog.feed.get(&format!("menu/{}", item.id)).unwrap();
        assert_eq!(raw["nombre_comida"], "Cazuela");
        assert_eq!(raw["precio_comida"], "6500.50");
        assert_eq!(raw["seccion"], "Cocina");
    }

    #[test]
    fn test_create_menu_item_requires_name_and_price() {
        let catalog = service();
        let err = catalog
            .create_menu_item(dish("", "100", None, "Cocina"))
            .unwrap_err();
        assert_eq!(err.message, "Please fill in all fields");

        let err = catalog
            .create_menu_item(dish("Pan", "  ", None, "Cocina"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let err = catalog
            .create_menu_item(dish("Pan", "gratis", None, "Cocina"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPrice);

        assert!(catalog.list_menu().unwrap().is_empty());
    }

    #[test]
    fn test_update_and_delete_menu_item() {
        let catalog = service();
        let item = catalog
            .create_menu_item(dish("Te", "900", None, "Cafetería"))
            .unwrap();

        let updated = catalog
            .update_menu_item(
                &item.id,
                MenuItemUpdate {
                    price: Some("1000".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.price, Decimal::from(1000));
        assert_eq!(updated.name, "Te");
        assert_eq!(catalog.get_menu_item(&item.id).unwrap(), updated);

        catalog.delete_menu_item(&item.id).unwrap();
        let err = catalog.get_menu_item(&item.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
        assert_eq!(
            catalog.delete_menu_item(&item.id).unwrap_err().code,
            ErrorCode::MenuItemNotFound
        );
    }

    #[test]
    fn test_ids_must_name_a_single_record() {
        let catalog = service();
        let item = catalog
            .create_menu_item(dish("Cazuela", "6500", None, "Cocina"))
            .unwrap();
        let nested = format!("{}/precio_comida", item.id);

        for id in [nested.as_str(), "a.b", "", "x#y"] {
            assert_eq!(
                catalog.get_menu_item(id).unwrap_err().code,
                ErrorCode::MenuItemNotFound
            );
            assert_eq!(
                catalog.delete_menu_item(id).unwrap_err().code,
                ErrorCode::MenuItemNotFound
            );
            assert_eq!(
                catalog.delete_category(id).unwrap_err().code,
                ErrorCode::CategoryNotFound
            );
            assert_eq!(
                catalog.delete_section(id).unwrap_err().code,
                ErrorCode::SectionNotFound
            );
        }
        assert_eq!(
            catalog
                .update_category(&nested, CategoryUpdate { name: Some("X".into()) })
                .unwrap_err()
                .code,
            ErrorCode::CategoryNotFound
        );

        // the dish is untouched
        assert_eq!(catalog.get_menu_item(&item.id).unwrap(), item);
    }

    #[test]
    fn test_category_lifecycle() {
        let catalog = service();
        let err = catalog
            .create_category(CategoryCreate { name: "  ".into() })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let category = catalog
            .create_category(CategoryCreate {
                name: "Postres".into(),
            })
            .unwrap();
        let renamed = catalog
            .update_category(
                &category.id,
                CategoryUpdate {
                    name: Some("Dulces".into()),
                },
            )
            .unwrap();
        assert_eq!(renamed.name, "Dulces");
        assert_eq!(catalog.list_categories().unwrap(), vec![renamed]);

        catalog.delete_category(&category.id).unwrap();
        assert!(catalog.list_categories().unwrap().is_empty());
        assert_eq!(
            catalog.delete_category(&category.id).unwrap_err().code,
            ErrorCode::CategoryNotFound
        );
    }

    #[test]
    fn test_deleting_category_moves_dishes_to_fallback_group() {
        let catalog = service();
        let category = catalog
            .create_category(CategoryCreate {
                name: "Fondos".into(),
            })
            .unwrap();
        catalog
            .create_menu_item(dish("Lomo", "9900", Some(&category.id), "Cocina"))
            .unwrap();
        assert_eq!(catalog.grouped_menu(None).unwrap()[0].category, "Fondos");

        catalog.delete_category(&category.id).unwrap();
        assert_eq!(catalog.grouped_menu(None).unwrap()[0].category, "Otro");
    }

    #[test]
    fn test_section_lifecycle() {
        let catalog = service();
        assert!(catalog
            .create_section(SectionCreate { name: "".into() })
            .is_err());

        let section = catalog
            .create_section(SectionCreate {
                name: "Cocina".into(),
            })
            .unwrap();
        assert_eq!(catalog.list_sections().unwrap().len(), 1);

        catalog.delete_section(&section.id).unwrap();
        assert_eq!(
            catalog.delete_section(&section.id).unwrap_err().code,
            ErrorCode::SectionNotFound
        );
    }
}
