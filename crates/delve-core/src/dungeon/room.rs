//! Rectangular rooms
//!
//! Rooms are sampled against the grid bounds only. Two rooms may overlap,
//! in which case they merge into one larger open area.

use log::{debug, trace};

use super::{CellType, GridMap, MapObserver};
use crate::GenerationError;
use crate::config::RoomConfig;
use crate::rng::MapRng;

/// A room rectangle: cells `[x, x + width) x [y, y + height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Room {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// One past the last column
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the last row
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this room shares at least one cell with another
    pub fn overlaps(&self, other: &Room) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Open up every cell of the room.
    ///
    /// The outermost ring of the grid is never carved, whatever the margin.
    /// Returns how many cells were written.
    pub fn carve<O: MapObserver>(&self, grid: &mut GridMap<O>) -> Result<usize, GenerationError> {
        let start_x = self.x.max(1);
        let start_y = self.y.max(1);
        let end_x = self.right().min(grid.cols().saturating_sub(1));
        let end_y = self.bottom().min(grid.rows().saturating_sub(1));

        let mut carved = 0;
        for y in start_y..end_y {
            for x in start_x..end_x {
                grid.set(x, y, CellType::Empty)?;
                carved += 1;
            }
        }
        trace!("carved room {:?} ({} cells)", self, carved);
        Ok(carved)
    }
}

/// Pick an origin in `[margin, dimension - size - margin)`.
///
/// When the room fits exactly (`dimension == size + 2 * margin`) the range is
/// empty and the only legal origin, `margin`, is returned.
fn sample_origin(rng: &mut MapRng, dimension: usize, size: usize, margin: usize) -> Option<usize> {
    let end = dimension.checked_sub(size + margin)?;
    if end < margin {
        return None;
    }
    Some(margin + rng.below(end - margin))
}

/// Sample one room that keeps `margin` cells clear of every grid edge.
///
/// Size and origin are redrawn until they fit, up to `max_attempts` times.
pub fn sample_room(
    rng: &mut MapRng,
    config: &RoomConfig,
    cols: usize,
    rows: usize,
) -> Result<Room, GenerationError> {
    let margin = config.margin;

    for _ in 0..config.max_attempts {
        let width = config.width.sample(rng);
        let height = config.height.sample(rng);

        let (Some(x), Some(y)) = (
            sample_origin(rng, cols, width, margin),
            sample_origin(rng, rows, height, margin),
        ) else {
            continue;
        };

        let room = Room::new(x, y, width, height);
        if room.right() + margin <= cols && room.bottom() + margin <= rows {
            return Ok(room);
        }
    }

    Err(GenerationError::Unsatisfiable {
        what: format!("a room in a {cols}x{rows} grid with margin {margin}"),
        attempts: config.max_attempts,
    })
}

/// Draw a room count, then sample and carve that many rooms
pub fn place_rooms<O: MapObserver>(
    grid: &mut GridMap<O>,
    rng: &mut MapRng,
    config: &RoomConfig,
) -> Result<Vec<Room>, GenerationError> {
    let count = config.count.sample(rng);
    let mut rooms = Vec::with_capacity(count);

    for _ in 0..count {
        let room = sample_room(rng, config, grid.cols(), grid.rows())?;
        room.carve(grid)?;
        rooms.push(room);
    }

    debug!("placed {} rooms", rooms.len());
    Ok(rooms)
}
