//! Straight corridors
//!
//! Corridors run along a single row or column. The generator lays evenly
//! spaced corridors across the whole grid; carving always overwrites, so a
//! corridor cuts straight through rooms and walls alike.

use log::{debug, trace};
use strum::Display;

use super::{CellType, GridMap, MapObserver};
use crate::GenerationError;
use crate::config::CorridorConfig;
use crate::rng::MapRng;

/// Direction a corridor runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// Along a row (constant y)
    Horizontal,
    /// Along a column (constant x)
    Vertical,
}

/// A straight run of cells between two inclusive endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corridor {
    start: (usize, usize),
    end: (usize, usize),
}

impl Corridor {
    /// Endpoints may come in either order but must share a row or column
    pub fn new(start: (usize, usize), end: (usize, usize)) -> Result<Self, GenerationError> {
        if start.0 != end.0 && start.1 != end.1 {
            return Err(GenerationError::NotStraight { start, end });
        }
        Ok(Self { start, end })
    }

    /// A corridor crossing the whole grid at `offset`
    pub fn spanning(axis: Axis, offset: usize, cols: usize, rows: usize) -> Self {
        match axis {
            Axis::Horizontal => Self {
                start: (0, offset),
                end: (cols.saturating_sub(1), offset),
            },
            Axis::Vertical => Self {
                start: (offset, 0),
                end: (offset, rows.saturating_sub(1)),
            },
        }
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    /// A one-cell corridor counts as horizontal
    pub fn axis(&self) -> Axis {
        if self.start.1 == self.end.1 {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }

    pub fn len(&self) -> usize {
        self.start.0.abs_diff(self.end.0) + self.start.1.abs_diff(self.end.1) + 1
    }

    /// Cells from the low end to the high end
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (x0, x1) = (self.start.0.min(self.end.0), self.start.0.max(self.end.0));
        let (y0, y1) = (self.start.1.min(self.end.1), self.start.1.max(self.end.1));
        (y0..=y1).flat_map(move |y| (x0..=x1).map(move |x| (x, y)))
    }

    /// Set every cell to empty. Nothing is written if an endpoint is off the grid.
    pub fn carve<O: MapObserver>(&self, grid: &mut GridMap<O>) -> Result<(), GenerationError> {
        for (x, y) in [self.start, self.end] {
            if !grid.contains(x, y) {
                return Err(GenerationError::OutOfBounds {
                    x,
                    y,
                    cols: grid.cols(),
                    rows: grid.rows(),
                });
            }
        }
        for (x, y) in self.cells() {
            grid.set(x, y, CellType::Empty)?;
        }
        trace!("carved {} corridor {:?} -> {:?}", self.axis(), self.start, self.end);
        Ok(())
    }
}

/// Evenly spaced offsets `i * floor(dimension / (count + 1))` for `i` in `1..=count`
pub fn corridor_offsets(dimension: usize, count: usize) -> Vec<usize> {
    let spacing = dimension / (count + 1);
    (1..=count).map(|i| i * spacing).collect()
}

/// Where the generator put its corridors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorridorLayout {
    /// Rows holding a horizontal corridor
    pub rows: Vec<usize>,
    /// Columns holding a vertical corridor
    pub cols: Vec<usize>,
}

fn offsets_for(
    axis: Axis,
    dimension: usize,
    count: usize,
) -> Result<Vec<usize>, GenerationError> {
    if count > 0 && dimension / (count + 1) == 0 {
        return Err(GenerationError::Unsatisfiable {
            what: format!("{count} {axis} corridors across {dimension} cells"),
            attempts: 1,
        });
    }
    Ok(corridor_offsets(dimension, count))
}

/// Draw corridor counts for both axes and carve them across the grid
pub fn place_corridors<O: MapObserver>(
    grid: &mut GridMap<O>,
    rng: &mut MapRng,
    config: &CorridorConfig,
) -> Result<CorridorLayout, GenerationError> {
    let horizontal = config.horizontal.sample(rng);
    let vertical = config.vertical.sample(rng);
    let (cols, rows) = (grid.cols(), grid.rows());

    let layout = CorridorLayout {
        rows: offsets_for(Axis::Horizontal, rows, horizontal)?,
        cols: offsets_for(Axis::Vertical, cols, vertical)?,
    };

    for &y in &layout.rows {
        Corridor::spanning(Axis::Horizontal, y, cols, rows).carve(grid)?;
    }
    for &x in &layout.cols {
        Corridor::spanning(Axis::Vertical, x, cols, rows).carve(grid)?;
    }

    debug!(
        "placed {} horizontal and {} vertical corridors",
        layout.rows.len(),
        layout.cols.len()
    );
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Bounds;

    #[test]
    fn test_diagonal_is_rejected() {
        assert_eq!(
            Corridor::new((1, 1), (3, 4)),
            Err(GenerationError::NotStraight {
                start: (1, 1),
                end: (3, 4)
            })
        );
    }

    #[test]
    fn test_endpoints_in_either_order() {
        let forward = Corridor::new((2, 5), (7, 5)).unwrap();
        let backward = Corridor::new((7, 5), (2, 5)).unwrap();
        assert_eq!(forward.len(), 6);
        assert_eq!(
            forward.cells().collect::<Vec<_>>(),
            backward.cells().collect::<Vec<_>>()
        );
        assert_eq!(forward.axis(), Axis::Horizontal);
        assert_eq!(Corridor::new((3, 0), (3, 4)).unwrap().axis(), Axis::Vertical);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(corridor_offsets(24, 3), vec![6, 12, 18]);
        assert_eq!(corridor_offsets(40, 5), vec![6, 12, 18, 24, 30]);
        assert_eq!(corridor_offsets(7, 1), vec![3]);
        assert!(corridor_offsets(10, 0).is_empty());
    }

    #[test]
    fn test_single_horizontal_corridor() {
        let mut grid = GridMap::new(7, 7);
        let mut rng = MapRng::new(0);
        let config = CorridorConfig {
            horizontal: Bounds::fixed(1),
            vertical: Bounds::fixed(0),
        };

        let layout = place_corridors(&mut grid, &mut rng, &config).unwrap();
        assert_eq!(layout.rows, vec![3]);
        assert!(layout.cols.is_empty());

        for cell in grid.cells() {
            assert_eq!(cell.typ.is_empty(), cell.y == 3, "cell {:?}", cell);
        }
    }

    #[test]
    fn test_corridor_overwrites_anything() {
        let mut grid = GridMap::new(5, 5);
        grid.set(2, 2, CellType::Item(crate::entity::ItemKind::Weapon))
            .unwrap();
        Corridor::spanning(Axis::Vertical, 2, 5, 5)
            .carve(&mut grid)
            .unwrap();
        assert_eq!(grid.get(2, 2).unwrap().typ, CellType::Empty);
        assert_eq!(grid.count(CellType::is_empty), 5);
    }

    #[test]
    fn test_carving_twice_is_idempotent() {
        let corridor = Corridor::spanning(Axis::Horizontal, 1, 6, 4);
        let mut once = GridMap::new(6, 4);
        corridor.carve(&mut once).unwrap();
        let mut twice = GridMap::new(6, 4);
        corridor.carve(&mut twice).unwrap();
        corridor.carve(&mut twice).unwrap();
        assert_eq!(once.to_string(), twice.to_string());
    }

    #[test]
    fn test_out_of_bounds_writes_nothing() {
        let mut grid = GridMap::new(5, 5);
        let corridor = Corridor::new((0, 2), (9, 2)).unwrap();
        assert!(matches!(
            corridor.carve(&mut grid),
            Err(GenerationError::OutOfBounds { x: 9, y: 2, .. })
        ));
        assert_eq!(grid.count(CellType::is_empty), 0);
    }

    #[test]
    fn test_crowded_corridors_are_unsatisfiable() {
        let mut grid = GridMap::new(3, 3);
        let mut rng = MapRng::new(0);
        let config = CorridorConfig {
            horizontal: Bounds::fixed(5),
            vertical: Bounds::fixed(0),
        };
        assert!(matches!(
            place_corridors(&mut grid, &mut rng, &config),
            Err(GenerationError::Unsatisfiable { .. })
        ));
    }

    #[test]
    fn test_default_counts() {
        for seed in 0..20 {
            let mut grid = GridMap::new(40, 24);
            let mut rng = MapRng::new(seed);
            let layout = place_corridors(&mut grid, &mut rng, &CorridorConfig::default()).unwrap();
            assert!((3..=5).contains(&layout.rows.len()));
            assert!((3..=5).contains(&layout.cols.len()));
        }
    }
}
