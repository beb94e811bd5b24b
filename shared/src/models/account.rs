//! Account Model

use serde::{Deserialize, Serialize};

use super::{Role, Screen};

/// Staff account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub uid: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}

/// Register account payload
///
/// `role` stays a raw tag here; it is parsed into [`Role`] when the
/// account is provisioned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: String,
}

/// Sign-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignIn {
    pub uid: String,
    pub name: String,
    pub role: Role,
    pub landing: Screen,
}
