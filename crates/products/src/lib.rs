//! Products capability.
//!
//! The product hierarchy itself lives with the surrounding application. This
//! crate only defines what stock needs from it (the `Product` trait) and the
//! owning handle products travel in.

pub mod handle;
pub mod product;

pub use handle::ProductHandle;
pub use product::Product;
