//! Scattering entities onto open floor
//!
//! Each placement draws random cells until it finds an empty one. Every
//! placement uses up an empty cell, so callers scatter items before
//! characters and the order of calls decides how crowded the map gets.

use log::{debug, warn};

use super::{Character, EntityKind, Stats};
use crate::GenerationError;
use crate::config::SpawnRule;
use crate::dungeon::{CellType, GridMap, MapObserver};
use crate::rng::MapRng;

/// Place `count` entities of `kind` on empty cells, with default stats
pub fn scatter<O: MapObserver>(
    grid: &mut GridMap<O>,
    rng: &mut MapRng,
    kind: EntityKind,
    count: usize,
    attempts: usize,
) -> Result<Vec<(usize, usize)>, GenerationError> {
    scatter_with(grid, rng, kind, count, attempts, |_, _| Stats::default())
}

/// Place `count` entities of `kind` on empty cells.
///
/// `factory(x, y)` supplies the stats of each character; it is not called
/// for items. Fails without touching the grid when fewer than `count` empty
/// cells remain. Returns the chosen cells in placement order.
pub fn scatter_with<O, F>(
    grid: &mut GridMap<O>,
    rng: &mut MapRng,
    kind: EntityKind,
    count: usize,
    attempts: usize,
    mut factory: F,
) -> Result<Vec<(usize, usize)>, GenerationError>
where
    O: MapObserver,
    F: FnMut(usize, usize) -> Stats,
{
    let available = grid.count(CellType::is_empty);
    if count > available {
        return Err(GenerationError::NoSpaceAvailable {
            kind,
            requested: count,
            available,
        });
    }

    let mut placed = Vec::with_capacity(count);
    while placed.len() < count {
        let (x, y) = pick_empty(grid, rng, attempts)?;
        let typ = match kind {
            EntityKind::Item(item) => CellType::Item(item),
            EntityKind::Character(character) => {
                let id = grid.allocate_entity_id();
                CellType::Character(Character::from_stats(id, character, factory(x, y)))
            }
        };
        grid.set(x, y, typ)?;
        placed.push((x, y));
    }

    debug!("scattered {} {}", placed.len(), kind);
    Ok(placed)
}

/// Rejection-sample an empty cell; enumerate once the draws run out
fn pick_empty<O: MapObserver>(
    grid: &GridMap<O>,
    rng: &mut MapRng,
    attempts: usize,
) -> Result<(usize, usize), GenerationError> {
    for _ in 0..attempts {
        let (x, y) = rng.random_cell(grid.cols(), grid.rows());
        if grid.get(x, y)?.typ.is_empty() {
            return Ok((x, y));
        }
    }

    let empty = grid.empty_cells();
    warn!(
        "no empty cell after {} draws, choosing among {} remaining",
        attempts,
        empty.len()
    );
    rng.choose(&empty)
        .copied()
        .ok_or(GenerationError::Unsatisfiable {
            what: "an empty cell".to_string(),
            attempts,
        })
}

/// Apply spawn rules in order; returns how many of each rule were placed
pub fn populate<O: MapObserver>(
    grid: &mut GridMap<O>,
    rng: &mut MapRng,
    rules: &[SpawnRule],
    attempts: usize,
) -> Result<Vec<(EntityKind, usize)>, GenerationError> {
    rules
        .iter()
        .map(|rule| {
            scatter(grid, rng, rule.kind, rule.count, attempts)
                .map(|placed| (rule.kind, placed.len()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::MapEvent;
    use crate::entity::{CharacterKind, ItemKind};

    fn open_grid(cols: usize, rows: usize) -> GridMap {
        let mut grid = GridMap::new(cols, rows);
        for y in 0..rows {
            for x in 0..cols {
                grid.set(x, y, CellType::Empty).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_single_free_cell() {
        let mut grid = GridMap::new(10, 10);
        grid.set(6, 2, CellType::Empty).unwrap();
        let mut rng = MapRng::new(11);

        let placed = scatter(&mut grid, &mut rng, EntityKind::RESOURCE, 1, 500).unwrap();
        assert_eq!(placed, vec![(6, 2)]);
        assert_eq!(
            grid.get(6, 2).unwrap().typ,
            CellType::Item(ItemKind::Resource)
        );

        let err = scatter(&mut grid, &mut rng, EntityKind::RESOURCE, 1, 500).unwrap_err();
        assert_eq!(
            err,
            GenerationError::NoSpaceAvailable {
                kind: EntityKind::RESOURCE,
                requested: 1,
                available: 0
            }
        );
    }

    #[test]
    fn test_oversubscribed_leaves_grid_untouched() {
        let mut grid = open_grid(2, 2);
        let before = grid.to_string();
        let mut rng = MapRng::new(1);
        assert!(scatter(&mut grid, &mut rng, EntityKind::ENEMY, 5, 100).is_err());
        assert_eq!(grid.to_string(), before);
    }

    #[test]
    fn test_fills_every_cell_without_collision() {
        let mut grid = open_grid(4, 4);
        let mut rng = MapRng::new(2);
        let placed = scatter(&mut grid, &mut rng, EntityKind::WEAPON, 16, 3).unwrap();

        let mut unique = placed.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 16);
        assert_eq!(grid.count(CellType::is_empty), 0);
    }

    #[test]
    fn test_zero_attempts_still_places() {
        let mut grid = open_grid(3, 3);
        let mut rng = MapRng::new(4);
        let placed = scatter(&mut grid, &mut rng, EntityKind::ENEMY, 2, 0).unwrap();
        assert_eq!(placed.len(), 2);
    }

    #[test]
    fn test_factory_sets_character_stats() {
        let mut grid = open_grid(5, 5);
        let mut rng = MapRng::new(3);
        let placed = scatter_with(&mut grid, &mut rng, EntityKind::PLAYER, 1, 100, |x, _| {
            Stats {
                health: 50.0 + x as f64,
                power: 1.0,
            }
        })
        .unwrap();

        let (x, y) = placed[0];
        let character = grid.character(x, y).unwrap();
        assert_eq!(character.kind, CharacterKind::Player);
        assert_eq!(character.health, 50.0 + x as f64);
        assert_eq!(character.power, 1.0);
    }

    #[test]
    fn test_characters_get_distinct_ids() {
        let mut grid = open_grid(6, 6);
        let mut rng = MapRng::new(8);
        let placed = scatter(&mut grid, &mut rng, EntityKind::ENEMY, 6, 100).unwrap();

        let mut ids: Vec<_> = placed
            .iter()
            .map(|&(x, y)| grid.character(x, y).unwrap().id)
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_each_placement_targets_an_empty_cell() {
        let mut grid = GridMap::with_observer(6, 6, Vec::<MapEvent>::new());
        for y in 1..5 {
            for x in 1..5 {
                grid.set(x, y, CellType::Empty).unwrap();
            }
        }
        let mut rng = MapRng::new(6);
        scatter(&mut grid, &mut rng, EntityKind::RESOURCE, 5, 100).unwrap();
        scatter(&mut grid, &mut rng, EntityKind::ENEMY, 5, 100).unwrap();

        let placements: Vec<_> = grid
            .observer()
            .iter()
            .filter_map(|e| match e {
                MapEvent::CellChanged { old, new, .. } if new.is_occupied() => Some(*old),
                _ => None,
            })
            .collect();
        assert_eq!(placements.len(), 10);
        assert!(placements.iter().all(CellType::is_empty));
    }

    #[test]
    fn test_populate_follows_rules() {
        let mut grid = open_grid(10, 10);
        let mut rng = MapRng::new(12);
        let rules = [
            SpawnRule::new(EntityKind::RESOURCE, 4),
            SpawnRule::new(EntityKind::ENEMY, 3),
        ];
        let counts = populate(&mut grid, &mut rng, &rules, 100).unwrap();
        assert_eq!(
            counts,
            vec![(EntityKind::RESOURCE, 4), (EntityKind::ENEMY, 3)]
        );
        assert_eq!(
            grid.count(|t| t.entity_kind() == Some(EntityKind::RESOURCE)),
            4
        );
        assert_eq!(grid.count(|t| t.entity_kind() == Some(EntityKind::ENEMY)), 3);
    }
}
