//! Items and characters placed on the map

mod character;
mod kind;
mod scatter;

pub use character::{Character, DEFAULT_POWER, EntityId, Feature, MAX_HEALTH, Stats};
pub use kind::{CharacterKind, EntityKind, ItemKind};
pub use scatter::{populate, scatter, scatter_with};
