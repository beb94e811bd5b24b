//! Section Model

use serde::{Deserialize, Serialize};

/// Section entity (Sección) - routing tag that decides which station prepares a dish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
}

/// Section record as stored at `secciones/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    #[serde(rename = "nombre_seccion")]
    pub name: String,
}

impl Section {
    pub fn from_record(id: impl Into<String>, record: SectionRecord) -> Self {
        Self {
            id: id.into(),
            name: record.name,
        }
    }
}

/// Create section payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionCreate {
    pub name: String,
}
