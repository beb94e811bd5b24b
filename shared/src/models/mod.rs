//! Data models
//!
//! Shared between comanda-server and its clients (via API).
//! Feed-backed entities come in pairs: the API shape with an `id`, and a
//! `*Record` with the field names stored on the document feed.

pub mod account;
pub mod category;
pub mod menu_item;
pub mod order;
pub mod person;
pub mod role;
pub mod section;
pub mod station;

// Re-exports
pub use account::*;
pub use category::*;
pub use menu_item::*;
pub use order::*;
pub use person::*;
pub use role::*;
pub use section::*;
pub use station::*;
