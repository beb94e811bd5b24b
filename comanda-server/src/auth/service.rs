//! AccountService - staff accounts and sign-in
//!
//! Accounts live in memory, keyed by normalized email. The role from
//! sign-in only decides the landing screen; the HTTP API itself does not
//! check it.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use shared::error::ErrorCode;
use shared::models::{Account, AccountCreate, Role, SignIn};

use super::password::{hash_password, verify_password};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Clone, Default)]
pub struct AccountService {
    /// normalized email -> account
    accounts: Arc<DashMap<String, Account>>,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService")
            .field("accounts", &self.accounts.len())
            .finish()
    }
}

impl AccountService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Provision an account
    pub fn register(&self, data: AccountCreate) -> AppResult<Account> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        let email = normalize_email(&data.email);
        if !email.contains('@') || email.len() > MAX_EMAIL_LEN {
            return Err(AppError::new(ErrorCode::InvalidEmail).with_detail("email", data.email));
        }
        if data.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::new(ErrorCode::PasswordTooShort));
        }
        if data.password.len() > MAX_PASSWORD_LEN {
            return Err(AppError::validation(format!(
                "password is too long (max {MAX_PASSWORD_LEN})"
            )));
        }
        let role: Role = data.role.parse()?;

        if self.accounts.contains_key(&email) {
            return Err(AppError::new(ErrorCode::EmailAlreadyInUse));
        }
        let password_hash = hash_password(&data.password)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

        let account = Account {
            uid: uuid::Uuid::new_v4().to_string(),
            name: data.name.trim().to_string(),
            email: email.clone(),
            role,
            password_hash,
        };
        match self.accounts.entry(email) {
            Entry::Occupied(_) => Err(AppError::new(ErrorCode::EmailAlreadyInUse)),
            Entry::Vacant(slot) => {
                slot.insert(account.clone());
                tracing::info!(uid = %account.uid, role = %account.role, "Account registered");
                Ok(account)
            }
        }
    }

    /// Check credentials and resolve the landing screen
    ///
    /// Unknown email and wrong password give the same error.
    pub fn sign_in(&self, email: &str, password: &str) -> AppResult<SignIn> {
        let email = normalize_email(email);
        let Some(account) = self.accounts.get(&email).map(|a| a.value().clone()) else {
            tracing::warn!(email = %email, "Sign-in for unknown account");
            return Err(AppError::invalid_credentials());
        };
        if !verify_password(password, &account.password_hash) {
            tracing::warn!(uid = %account.uid, "Sign-in with wrong password");
            return Err(AppError::invalid_credentials());
        }

        tracing::info!(uid = %account.uid, role = %account.role, "Signed in");
        Ok(SignIn {
            uid: account.uid,
            name: account.name,
            role: account.role,
            landing: account.role.landing_screen(),
        })
    }

    /// Create the configured administrator unless the email is taken
    pub fn bootstrap_admin(&self, email: &str, password: &str) -> AppResult<Option<Account>> {
        if self.accounts.contains_key(&normalize_email(email)) {
            return Ok(None);
        }
        let account = self.register(AccountCreate {
            name: "Administrador".into(),
            email: email.into(),
            password: password.into(),
            role: Role::Administrador.as_str().into(),
        })?;
        Ok(Some(account))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
