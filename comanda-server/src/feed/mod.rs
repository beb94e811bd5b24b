//! Document feed - the shared realtime store
//!
//! - [`FeedStore`] - JSON tree with set/update/push/remove and change notices
//! - [`FeedSubscription`] - snapshot-per-change subscription to one path
//! - [`FeedPath`] - validated slash-separated path
//! - [`PushIdGenerator`] - time-ordered keys for appended records

pub mod path;
pub mod push_id;
pub mod store;
pub mod subscription;

pub use path::FeedPath;
pub use push_id::PushIdGenerator;
pub use store::{FeedStore, FeedVersions};
pub use subscription::FeedSubscription;
