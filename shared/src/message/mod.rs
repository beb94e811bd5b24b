//! Feed change notifications
//!
//! Published by the feed store on every successful write and consumed by
//! subscriptions (station displays, live endpoints).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of write that produced a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAction {
    Set,
    Update,
    Push,
    Remove,
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeAction::Set => write!(f, "set"),
            ChangeAction::Update => write!(f, "update"),
            ChangeAction::Push => write!(f, "push"),
            ChangeAction::Remove => write!(f, "remove"),
        }
    }
}

/// One feed write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedChange {
    /// Top-level resource ("menu", "pedidos", ...)
    pub resource: String,
    /// Full slash-separated path that was written
    pub path: String,
    /// Per-resource version after this write (starts at 1)
    pub version: u64,
    pub action: ChangeAction,
}
