//! Notifications sent to whatever is drawing the map
//!
//! The generator never touches a display. It reports every change to a
//! [`MapObserver`], and the renderer decides what to do with it.

use serde::{Deserialize, Serialize};

use super::CellType;
use crate::entity::EntityId;

/// Receives map changes as they happen. All methods default to no-ops.
pub trait MapObserver {
    /// A grid of the given size was created, every cell a wall
    fn on_grid_created(&mut self, _cols: usize, _rows: usize) {}

    /// A cell was overwritten (possibly with the same value)
    fn on_cell_changed(&mut self, _x: usize, _y: usize, _old: &CellType, _new: &CellType) {}

    /// A character's health changed
    fn on_health_changed(&mut self, _entity: EntityId, _percent: f64) {}
}

impl MapObserver for () {}

impl<O: MapObserver + ?Sized> MapObserver for &mut O {
    fn on_grid_created(&mut self, cols: usize, rows: usize) {
        (**self).on_grid_created(cols, rows);
    }

    fn on_cell_changed(&mut self, x: usize, y: usize, old: &CellType, new: &CellType) {
        (**self).on_cell_changed(x, y, old, new);
    }

    fn on_health_changed(&mut self, entity: EntityId, percent: f64) {
        (**self).on_health_changed(entity, percent);
    }
}

/// A recorded notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MapEvent {
    GridCreated {
        cols: usize,
        rows: usize,
    },
    CellChanged {
        x: usize,
        y: usize,
        old: CellType,
        new: CellType,
    },
    HealthChanged {
        entity: EntityId,
        percent: f64,
    },
}

/// Records every notification in order
impl MapObserver for Vec<MapEvent> {
    fn on_grid_created(&mut self, cols: usize, rows: usize) {
        self.push(MapEvent::GridCreated { cols, rows });
    }

    fn on_cell_changed(&mut self, x: usize, y: usize, old: &CellType, new: &CellType) {
        self.push(MapEvent::CellChanged {
            x,
            y,
            old: *old,
            new: *new,
        });
    }

    fn on_health_changed(&mut self, entity: EntityId, percent: f64) {
        self.push(MapEvent::HealthChanged { entity, percent });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_keeps_order() {
        let mut events: Vec<MapEvent> = Vec::new();
        events.on_grid_created(3, 2);
        events.on_cell_changed(1, 1, &CellType::Wall, &CellType::Empty);
        events.on_health_changed(EntityId(4), 50.0);

        assert_eq!(
            events,
            vec![
                MapEvent::GridCreated { cols: 3, rows: 2 },
                MapEvent::CellChanged {
                    x: 1,
                    y: 1,
                    old: CellType::Wall,
                    new: CellType::Empty
                },
                MapEvent::HealthChanged {
                    entity: EntityId(4),
                    percent: 50.0
                },
            ]
        );
    }

    #[test]
    fn test_forwarding_through_reference() {
        fn notify<O: MapObserver>(mut observer: O) {
            observer.on_grid_created(1, 1);
        }

        let mut events: Vec<MapEvent> = Vec::new();
        notify(&mut events);
        assert_eq!(events, vec![MapEvent::GridCreated { cols: 1, rows: 1 }]);
    }

    #[test]
    fn test_event_json_is_tagged() {
        let event = MapEvent::CellChanged {
            x: 2,
            y: 5,
            old: CellType::Wall,
            new: CellType::Empty,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "cell_changed");
        assert_eq!(json["new"], "empty");
    }
}
