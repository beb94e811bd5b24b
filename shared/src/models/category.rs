//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity (Categoría) - display grouping for the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Category record as stored at `categorias/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    #[serde(rename = "nombre_categoria")]
    pub name: String,
}

impl Category {
    pub fn from_record(id: impl Into<String>, record: CategoryRecord) -> Self {
        Self {
            id: id.into(),
            name: record.name,
        }
    }

    pub fn to_record(&self) -> CategoryRecord {
        CategoryRecord {
            name: self.name.clone(),
        }
    }
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
}
