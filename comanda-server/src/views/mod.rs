//! Read-side views over the order feed

pub mod orders;
pub mod station;

pub use orders::decode_orders;
pub use station::{StationView, UNKNOWN_DISH_LABEL, UnresolvedDish};
