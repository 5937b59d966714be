//! Map cell types

use serde::{Deserialize, Serialize};

use crate::entity::{Character, EntityKind, ItemKind};

/// What occupies a cell
///
/// The cell type is the only record of occupancy. `Empty` is the only state
/// that carving produces and that entities may be placed onto.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    #[default]
    Wall,
    Empty,
    Item(ItemKind),
    Character(Character),
}

impl CellType {
    pub const fn is_wall(&self) -> bool {
        matches!(self, CellType::Wall)
    }

    /// Check if this cell is open floor with nothing on it
    pub const fn is_empty(&self) -> bool {
        matches!(self, CellType::Empty)
    }

    /// Check if something can stand here (walls are the only barrier)
    pub const fn is_traversable(&self) -> bool {
        !self.is_wall()
    }

    /// Check if an item or character has been placed here
    pub const fn is_occupied(&self) -> bool {
        matches!(self, CellType::Item(_) | CellType::Character(_))
    }

    /// Kind of the entity standing here, if any
    pub const fn entity_kind(&self) -> Option<EntityKind> {
        match self {
            CellType::Item(kind) => Some(EntityKind::Item(*kind)),
            CellType::Character(c) => Some(EntityKind::Character(c.kind)),
            CellType::Wall | CellType::Empty => None,
        }
    }

    pub const fn character(&self) -> Option<&Character> {
        match self {
            CellType::Character(c) => Some(c),
            _ => None,
        }
    }

    /// Get the display character for this cell type
    pub const fn symbol(&self) -> char {
        match self {
            CellType::Wall => '#',
            CellType::Empty => '.',
            CellType::Item(kind) => EntityKind::Item(*kind).symbol(),
            CellType::Character(c) => EntityKind::Character(c.kind).symbol(),
        }
    }
}

/// A cell together with its coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub typ: CellType,
}
