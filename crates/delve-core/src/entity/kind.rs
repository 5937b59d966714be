//! Entity kinds placed onto the map

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::GenerationError;

/// Non-blocking pickups
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ItemKind {
    /// Restores health when picked up
    Resource,
    /// Raises power when picked up
    Weapon,
}

/// Blocking characters
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CharacterKind {
    Player,
    Enemy,
}

/// Anything that can be scattered onto an empty cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Item(ItemKind),
    Character(CharacterKind),
}

impl EntityKind {
    pub const RESOURCE: EntityKind = EntityKind::Item(ItemKind::Resource);
    pub const WEAPON: EntityKind = EntityKind::Item(ItemKind::Weapon);
    pub const PLAYER: EntityKind = EntityKind::Character(CharacterKind::Player);
    pub const ENEMY: EntityKind = EntityKind::Character(CharacterKind::Enemy);

    /// Every kind, items first
    pub fn all() -> impl Iterator<Item = EntityKind> {
        ItemKind::iter()
            .map(EntityKind::Item)
            .chain(CharacterKind::iter().map(EntityKind::Character))
    }

    /// Characters occupy their cell; items can be walked over
    pub const fn is_blocking(&self) -> bool {
        matches!(self, EntityKind::Character(_))
    }

    pub const fn is_character(&self) -> bool {
        matches!(self, EntityKind::Character(_))
    }

    /// Map symbol used by text renderers
    pub const fn symbol(&self) -> char {
        match self {
            EntityKind::Item(ItemKind::Resource) => 'r',
            EntityKind::Item(ItemKind::Weapon) => 'w',
            EntityKind::Character(CharacterKind::Player) => '@',
            EntityKind::Character(CharacterKind::Enemy) => 'E',
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Item(kind) => fmt::Display::fmt(kind, f),
            EntityKind::Character(kind) => fmt::Display::fmt(kind, f),
        }
    }
}

impl FromStr for EntityKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if let Ok(kind) = ItemKind::from_str(&name) {
            return Ok(EntityKind::Item(kind));
        }
        CharacterKind::from_str(&name)
            .map(EntityKind::Character)
            .map_err(|_| GenerationError::InvalidConfig(format!("unknown entity kind '{s}'")))
    }
}

// Serialized by name so spawn rules read as {"kind": "enemy", ...}
impl Serialize for EntityKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EntityKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
