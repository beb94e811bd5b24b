//! Shared types for the Comanda workspace
//!
//! Domain models, feed layout, change notifications and the unified
//! error system used by the server and its clients.

pub mod error;
pub mod feed;
pub mod message;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use message::{ChangeAction, FeedChange};
pub use serde::{Deserialize, Serialize};
