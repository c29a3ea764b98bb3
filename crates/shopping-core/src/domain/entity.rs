//! Domain Layer - Core Entity Trait
//!
//! Basic contract for anything the store tracks by identity.

use std::collections::HashSet;

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Next free identifier after the largest one in use (1 for an empty set)
///
/// Once the largest id is `u32::MAX` the smallest unused id is taken instead.
pub(crate) fn next_id<'a, E>(entities: impl IntoIterator<Item = &'a E>) -> u32
where
    E: Entity<Id = u32> + 'a,
{
    let used: HashSet<u32> = entities.into_iter().map(Entity::id).collect();
    match used.iter().max() {
        None => 1,
        Some(max) => max
            .checked_add(1)
            .unwrap_or_else(|| (1..=u32::MAX).find(|id| !used.contains(id)).unwrap_or(0)),
    }
}
