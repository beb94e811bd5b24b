//! Catalog - dishes, categories and sections
//!
//! Admin writes go through [`CatalogService`]; readers decode a
//! [`CatalogSnapshot`] and derive [`MenuGroup`]s from it.

pub mod grouping;
pub mod service;
pub mod snapshot;

pub use grouping::{FALLBACK_CATEGORY, MenuGroup, group_menu};
pub use service::CatalogService;
pub use snapshot::CatalogSnapshot;
