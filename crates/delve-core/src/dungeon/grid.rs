//! The cell grid
//!
//! A fixed `cols` x `rows` array of cells, created once per map and never
//! resized. Every write goes through [`GridMap::set`] so the observer sees it.

use std::fmt;

use super::{Cell, CellType, MapObserver};
use crate::GenerationError;
use crate::entity::{Character, EntityId, Feature};

/// Grid of cells plus the observer that is told about every change
#[derive(Debug, Clone)]
pub struct GridMap<O: MapObserver = ()> {
    cols: usize,
    rows: usize,
    /// Row-major: index `y * cols + x`
    cells: Vec<CellType>,
    next_entity: EntityId,
    observer: O,
}

impl GridMap<()> {
    /// Create a grid of walls that reports to nobody
    pub fn new(cols: usize, rows: usize) -> Self {
        Self::with_observer(cols, rows, ())
    }
}

impl<O: MapObserver> GridMap<O> {
    /// Create a grid of walls reporting to `observer`
    pub fn with_observer(cols: usize, rows: usize, mut observer: O) -> Self {
        observer.on_grid_created(cols, rows);
        Self {
            cols,
            rows,
            cells: vec![CellType::Wall; cols * rows],
            next_entity: EntityId(1),
            observer,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Check if a coordinate lies on the grid
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GenerationError> {
        if !self.contains(x, y) {
            return Err(GenerationError::OutOfBounds {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(y * self.cols + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GenerationError> {
        let idx = self.index(x, y)?;
        Ok(Cell {
            x,
            y,
            typ: self.cells[idx],
        })
    }

    /// Overwrite a cell and notify the observer.
    ///
    /// The current contents are not inspected; callers that care about
    /// collisions check first.
    pub fn set(&mut self, x: usize, y: usize, typ: CellType) -> Result<(), GenerationError> {
        let idx = self.index(x, y)?;
        let old = std::mem::replace(&mut self.cells[idx], typ);
        self.observer.on_cell_changed(x, y, &old, &typ);
        Ok(())
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().map(|(idx, typ)| Cell {
            x: idx % self.cols,
            y: idx / self.cols,
            typ: *typ,
        })
    }

    /// Count cells matching a predicate
    pub fn count(&self, predicate: impl Fn(&CellType) -> bool) -> usize {
        self.cells.iter().filter(|typ| predicate(typ)).count()
    }

    /// Coordinates of every empty cell
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|cell| cell.typ.is_empty())
            .map(|cell| (cell.x, cell.y))
            .collect()
    }

    /// Hand out the id for the next character placed on this grid
    pub fn allocate_entity_id(&mut self) -> EntityId {
        let id = self.next_entity;
        self.next_entity = id.next();
        id
    }

    pub fn character(&self, x: usize, y: usize) -> Result<&Character, GenerationError> {
        let idx = self.index(x, y)?;
        self.cells[idx]
            .character()
            .ok_or(GenerationError::NotACharacter { x, y })
    }

    /// Raise a character's feature in place; returns the new value
    pub fn add_feature(
        &mut self,
        x: usize,
        y: usize,
        amount: f64,
        feature: Feature,
    ) -> Result<f64, GenerationError> {
        self.update_character(x, y, feature, |c| c.add_feature(amount, feature))
    }

    /// Lower a character's feature in place; returns the new value
    pub fn reduce_feature(
        &mut self,
        x: usize,
        y: usize,
        amount: f64,
        feature: Feature,
    ) -> Result<f64, GenerationError> {
        self.update_character(x, y, feature, |c| c.reduce_feature(amount, feature))
    }

    fn update_character(
        &mut self,
        x: usize,
        y: usize,
        feature: Feature,
        update: impl FnOnce(&mut Character) -> f64,
    ) -> Result<f64, GenerationError> {
        let idx = self.index(x, y)?;
        let CellType::Character(character) = &mut self.cells[idx] else {
            return Err(GenerationError::NotACharacter { x, y });
        };
        let value = update(character);
        // Only health is mirrored on screen
        if feature == Feature::Health {
            self.observer
                .on_health_changed(character.id, character.health_percent());
        }
        Ok(value)
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Drop the grid, keeping the observer
    pub fn into_observer(self) -> O {
        self.observer
    }
}

impl<O: MapObserver> fmt::Display for GridMap<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for typ in row {
                write!(f, "{}", typ.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
