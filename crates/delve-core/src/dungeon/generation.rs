//! Map generation pipeline
//!
//! Runs the phases in a fixed order: walls, rooms, corridors, then the
//! spawn rules. Later phases read the cells earlier phases wrote, so the
//! order is part of the result.

use log::debug;

use super::corridor::{CorridorLayout, place_corridors};
use super::room::{Room, place_rooms};
use super::{GridMap, MapObserver};
use crate::GenerationError;
use crate::config::GeneratorConfig;
use crate::entity::{EntityKind, populate};
use crate::rng::MapRng;

/// What the generator did, for logging and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub rooms: Vec<Room>,
    pub corridors: CorridorLayout,
    /// Entities placed per spawn rule, in rule order
    pub placements: Vec<(EntityKind, usize)>,
}

/// Generate a complete map
pub fn generate<O: MapObserver>(
    config: &GeneratorConfig,
    rng: &mut MapRng,
    observer: O,
) -> Result<GridMap<O>, GenerationError> {
    generate_with_report(config, rng, observer).map(|(grid, _)| grid)
}

/// Generate a complete map and describe how it was built
pub fn generate_with_report<O: MapObserver>(
    config: &GeneratorConfig,
    rng: &mut MapRng,
    observer: O,
) -> Result<(GridMap<O>, GenerationReport), GenerationError> {
    config.validate()?;
    debug!(
        "generating {}x{} map with seed {}",
        config.cols,
        config.rows,
        rng.seed()
    );

    let mut grid = GridMap::with_observer(config.cols, config.rows, observer);
    let rooms = place_rooms(&mut grid, rng, &config.rooms)?;
    let corridors = place_corridors(&mut grid, rng, &config.corridors)?;
    let placements = populate(&mut grid, rng, &config.entities, config.scatter_attempts)?;

    Ok((
        grid,
        GenerationReport {
            rooms,
            corridors,
            placements,
        },
    ))
}
