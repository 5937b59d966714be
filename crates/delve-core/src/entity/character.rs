//! Character attributes
//!
//! Player and enemy share one record; the `kind` field tells them apart.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::CharacterKind;
use crate::GenerationError;

/// Upper bound for health
pub const MAX_HEALTH: f64 = 100.0;

/// Power a freshly placed character starts with
pub const DEFAULT_POWER: f64 = 33.3;

/// Unique identifier for placed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    pub fn next(self) -> Self {
        EntityId(self.0 + 1)
    }
}

/// Attributes that can be adjusted by name
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Feature {
    /// Clamped to `0..=MAX_HEALTH`; changes are reported to the renderer
    Health,
    /// Grows without limit, never drops below zero
    Power,
}

impl Feature {
    /// Parse a feature name, rejecting anything outside the closed set
    pub fn parse(name: &str) -> Result<Self, GenerationError> {
        Feature::from_str(name).map_err(|_| GenerationError::UnknownFeature(name.to_string()))
    }
}

/// Starting attributes handed out by a scatter factory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub health: f64,
    pub power: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            health: MAX_HEALTH,
            power: DEFAULT_POWER,
        }
    }
}

/// A placed player or enemy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: EntityId,
    pub kind: CharacterKind,
    pub health: f64,
    pub power: f64,
}

impl Character {
    pub fn new(id: EntityId, kind: CharacterKind) -> Self {
        Self::from_stats(id, kind, Stats::default())
    }

    /// Build a character from factory stats. Health is clamped into range.
    pub fn from_stats(id: EntityId, kind: CharacterKind, stats: Stats) -> Self {
        Self {
            id,
            kind,
            health: stats.health.clamp(0.0, MAX_HEALTH),
            power: stats.power.max(0.0),
        }
    }

    /// Current value of a feature
    pub fn feature(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Health => self.health,
            Feature::Power => self.power,
        }
    }

    /// Raise a feature, returning its new value
    pub fn add_feature(&mut self, amount: f64, feature: Feature) -> f64 {
        match feature {
            Feature::Health => self.health = (self.health + amount).clamp(0.0, MAX_HEALTH),
            Feature::Power => self.power += amount,
        }
        self.feature(feature)
    }

    /// Lower a feature, returning its new value. Never goes below zero.
    pub fn reduce_feature(&mut self, amount: f64, feature: Feature) -> f64 {
        match feature {
            Feature::Health => self.health = (self.health - amount).clamp(0.0, MAX_HEALTH),
            Feature::Power => self.power = (self.power - amount).max(0.0),
        }
        self.feature(feature)
    }

    /// Health as a percentage of the maximum, for health bars
    pub fn health_percent(&self) -> f64 {
        self.health / MAX_HEALTH * 100.0
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}
