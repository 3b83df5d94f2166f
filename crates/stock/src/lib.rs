//! Stock domain module.
//!
//! `StoreStock` owns a set of polymorphic products and is the only party that
//! destroys them, until a product is released back to a caller.

pub mod stock;
pub mod summary;

pub use stock::{AddRejected, StoreStock};
pub use summary::StockSummary;
