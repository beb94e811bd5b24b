//! Order composition
//!
//! - [`OrderComposer`] - roster, selection pointer, quantities, notes
//! - [`TableRegistry`] - one [`TableSession`] per table number
//! - [`OrderSink`] - append target for submitted orders

pub mod order_composer;
pub mod sink;
pub mod table;

pub use order_composer::{Direction, OrderComposer};
pub use sink::{FeedOrderSink, OrderSink};
pub use table::{SUBMIT_ERROR_PREFIX, TableRegistry, TableSession, TableState};
