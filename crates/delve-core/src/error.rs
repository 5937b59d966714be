//! Generation errors
//!
//! Every failure aborts the generation attempt; callers get the error
//! instead of a half-populated grid.

use thiserror::Error;

use crate::entity::EntityKind;

/// Errors raised while building or mutating a map
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("cell ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },

    #[error("could not place {what} after {attempts} attempts")]
    Unsatisfiable { what: String, attempts: usize },

    #[error("no space for {requested} {kind}: only {available} empty cells left")]
    NoSpaceAvailable {
        kind: EntityKind,
        requested: usize,
        available: usize,
    },

    #[error("corridor from {start:?} to {end:?} is not a straight line")]
    NotStraight {
        start: (usize, usize),
        end: (usize, usize),
    },

    #[error("cell ({x}, {y}) does not hold a character")]
    NotACharacter { x: usize, y: usize },

    #[error("unknown feature: {0}")]
    UnknownFeature(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
