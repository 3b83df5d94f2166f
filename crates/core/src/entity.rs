//! Entity trait: identity + continuity across moves.

/// Entity marker + minimal interface.
///
/// An entity is recognised by its identifier, never by the values it carries.
/// Two entities holding equal state but different identifiers are different.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity match: same identifier, regardless of state.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
