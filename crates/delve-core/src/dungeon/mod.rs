//! Map grid and its generation phases
//!
//! Contains cells, the grid, rooms, corridors and the pipeline that runs
//! them in order.

mod cell;
mod corridor;
mod generation;
mod grid;
mod observer;
mod room;

pub use cell::{Cell, CellType};
pub use corridor::{Axis, Corridor, CorridorLayout, corridor_offsets, place_corridors};
pub use generation::{GenerationReport, generate, generate_with_report};
pub use grid::GridMap;
pub use observer::{MapEvent, MapObserver};
pub use room::{Room, place_rooms, sample_room};
