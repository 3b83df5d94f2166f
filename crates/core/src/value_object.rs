//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. Two value objects with the same values
//! are considered equal (a stock summary, a price, a volume).

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two summaries with the same totals are equal)
/// - **Entity**: has identity (two product handles are distinct even when the
///   products they own are equal)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Volume(f64);
///
/// impl ValueObject for Volume {}
///
/// assert_eq!(Volume(1.5), Volume(1.5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
