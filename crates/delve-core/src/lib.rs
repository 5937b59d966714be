//! delve-core: procedural room-and-corridor maps
//!
//! Builds a walled grid, carves rooms and corridors into it, then scatters
//! items and characters onto the open floor. Nothing here draws anything:
//! changes are reported to a [`dungeon::MapObserver`] supplied by the caller.

pub mod config;
pub mod dungeon;
pub mod entity;

mod error;
mod rng;

pub use config::GeneratorConfig;
pub use dungeon::{GridMap, generate, generate_with_report};
pub use error::GenerationError;
pub use rng::MapRng;
