//! Staff accounts and role-based landing

pub mod password;
pub mod service;

pub use service::AccountService;
