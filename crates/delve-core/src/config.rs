//! Generator configuration
//!
//! Defaults reproduce the stock 40x24 map. Every field has a default, so a
//! JSON file only needs to name what it changes.

use serde::{Deserialize, Serialize};

use crate::GenerationError;
use crate::entity::EntityKind;
use crate::rng::MapRng;

pub const DEFAULT_COLS: usize = 40;
pub const DEFAULT_ROWS: usize = 24;

/// Largest grid the generator will allocate
pub const MAX_CELLS: usize = 1 << 24;

/// Minimum distance between a room and the grid edge
pub const ROOM_MARGIN: usize = 3;

/// Retry cap for room sampling
pub const ROOM_ATTEMPTS: usize = 1000;

/// Random draws per placement before scatter enumerates the empty cells
pub const SCATTER_ATTEMPTS: usize = 500;

/// Inclusive `min..=max` range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// A range holding exactly one value
    pub const fn fixed(value: usize) -> Self {
        Self::new(value, value)
    }

    pub const fn contains(&self, value: usize) -> bool {
        value >= self.min && value <= self.max
    }

    /// Draw uniformly from the range
    pub fn sample(&self, rng: &mut MapRng) -> usize {
        rng.between(self.min, self.max)
    }

    fn check(&self, name: &str) -> Result<(), GenerationError> {
        if self.min > self.max {
            return Err(GenerationError::InvalidConfig(format!(
                "{name}: min {} is greater than max {}",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Room sampling settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    /// How many rooms to carve, drawn once per map
    pub count: Bounds,
    pub width: Bounds,
    pub height: Bounds,
    pub margin: usize,
    /// Samples per room before giving up
    pub max_attempts: usize,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            count: Bounds::new(5, 10),
            width: Bounds::new(3, 8),
            height: Bounds::new(3, 8),
            margin: ROOM_MARGIN,
            max_attempts: ROOM_ATTEMPTS,
        }
    }
}

/// Corridor counts per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorConfig {
    /// Full-width corridors, one per row offset
    pub horizontal: Bounds,
    /// Full-height corridors, one per column offset
    pub vertical: Bounds,
}

impl Default for CorridorConfig {
    fn default() -> Self {
        Self {
            horizontal: Bounds::new(3, 5),
            vertical: Bounds::new(3, 5),
        }
    }
}

/// Place `count` entities of `kind`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnRule {
    pub kind: EntityKind,
    pub count: usize,
}

impl SpawnRule {
    pub const fn new(kind: EntityKind, count: usize) -> Self {
        Self { kind, count }
    }
}

/// Everything the generator needs to build a map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub cols: usize,
    pub rows: usize,
    pub rooms: RoomConfig,
    pub corridors: CorridorConfig,
    /// Applied in order; items must come before characters
    pub entities: Vec<SpawnRule>,
    pub scatter_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            rooms: RoomConfig::default(),
            corridors: CorridorConfig::default(),
            entities: vec![
                SpawnRule::new(EntityKind::RESOURCE, 10),
                SpawnRule::new(EntityKind::WEAPON, 2),
                SpawnRule::new(EntityKind::PLAYER, 1),
                SpawnRule::new(EntityKind::ENEMY, 10),
            ],
            scatter_attempts: SCATTER_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// Default settings on a grid of another size
    pub fn with_size(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            ..Self::default()
        }
    }

    /// Reject settings the generator cannot run with
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(GenerationError::InvalidConfig(format!(
                "grid must not be empty, got {}x{}",
                self.cols, self.rows
            )));
        }
        if self
            .cols
            .checked_mul(self.rows)
            .is_none_or(|cells| cells > MAX_CELLS)
        {
            return Err(GenerationError::InvalidConfig(format!(
                "grid of {}x{} cells exceeds the limit of {MAX_CELLS}",
                self.cols, self.rows
            )));
        }

        self.rooms.count.check("rooms.count")?;
        self.rooms.width.check("rooms.width")?;
        self.rooms.height.check("rooms.height")?;
        if self.rooms.width.min == 0 || self.rooms.height.min == 0 {
            return Err(GenerationError::InvalidConfig(
                "rooms must be at least 1x1".to_string(),
            ));
        }
        if self.rooms.max_attempts == 0 {
            return Err(GenerationError::InvalidConfig(
                "rooms.max_attempts must be positive".to_string(),
            ));
        }

        self.corridors.horizontal.check("corridors.horizontal")?;
        self.corridors.vertical.check("corridors.vertical")?;

        // Items are scattered first so characters never sit on loot
        if let Some(pos) = self.entities.iter().position(|r| r.kind.is_character())
            && let Some(item) = self.entities[pos..].iter().find(|r| !r.kind.is_character())
        {
            return Err(GenerationError::InvalidConfig(format!(
                "{} must be placed before characters",
                item.kind
            )));
        }

        Ok(())
    }
}
