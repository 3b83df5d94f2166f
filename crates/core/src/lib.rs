//! `storestock-core` — shared building blocks for the stock crates.
//!
//! Identities, the error model and the small marker traits the product and
//! stock crates build on. No logging or IO lives here.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{StockError, StockOperation, StockResult};
pub use id::HandleId;
pub use value_object::ValueObject;
