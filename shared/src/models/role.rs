//! Role Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorCode};

/// Staff role (cargo), resolved once at sign-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Waitstaff: opens tables and composes orders
    Garzon,
    /// Kitchen and cafeteria staff
    Cocinero,
    /// Maintains the catalog and provisions accounts
    Administrador,
}

/// Screen a user lands on after sign-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Table list and order composer
    Tables,
    /// Kitchen / cafeteria picker
    Stations,
    /// Catalog and account administration
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Garzon => "garzon",
            Role::Cocinero => "cocinero",
            Role::Administrador => "administrador",
        }
    }

    pub fn landing_screen(&self) -> Screen {
        match self {
            Role::Garzon => Screen::Tables,
            Role::Cocinero => Screen::Stations,
            Role::Administrador => Screen::Admin,
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "garzon" => Ok(Role::Garzon),
            "cocinero" => Ok(Role::Cocinero),
            "administrador" => Ok(Role::Administrador),
            other => Err(AppError::new(ErrorCode::InvalidRole).with_detail("role", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
