//! Text and JSON output
//!
//! Turns generator notifications into something a display can consume.
//! Cell events gain the pixel position of the cell's top-left corner.

use std::io::{self, Write};

use serde_json::{Value, json};

use delve_core::GridMap;
use delve_core::dungeon::{MapEvent, MapObserver};
use delve_core::entity::EntityKind;

/// Pixel size of one cell
pub const DEFAULT_TILE_SIZE: u32 = 30;

/// Pixel offset of a cell coordinate
pub fn pixel(coord: usize, tile_size: u32) -> u64 {
    coord as u64 * u64::from(tile_size)
}

/// An event as JSON, with `left`/`top` pixel offsets on cell changes
pub fn event_json(event: &MapEvent, tile_size: u32) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(event)?;
    if let MapEvent::CellChanged { x, y, .. } = event
        && let Some(fields) = value.as_object_mut()
    {
        fields.insert("left".to_string(), json!(pixel(*x, tile_size)));
        fields.insert("top".to_string(), json!(pixel(*y, tile_size)));
    }
    Ok(value)
}

/// Write one JSON object per line
pub fn write_events(out: &mut impl Write, events: &[MapEvent], tile_size: u32) -> io::Result<()> {
    for event in events {
        let value = event_json(event, tile_size)?;
        writeln!(out, "{value}")?;
    }
    Ok(())
}

/// How many of each entity kind sit on the grid
pub fn census<O: MapObserver>(grid: &GridMap<O>) -> Vec<(EntityKind, usize)> {
    EntityKind::all()
        .map(|kind| (kind, grid.count(|t| t.entity_kind() == Some(kind))))
        .collect()
}

/// Draw the map followed by the entity census
pub fn write_map<O: MapObserver>(out: &mut impl Write, grid: &GridMap<O>) -> io::Result<()> {
    write!(out, "{grid}")?;
    for (kind, count) in census(grid) {
        writeln!(out, "{kind} ({}): {count}", kind.symbol())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::dungeon::CellType;
    use delve_core::entity::ItemKind;

    #[test]
    fn test_pixel_offsets() {
        assert_eq!(pixel(0, 30), 0);
        assert_eq!(pixel(7, 30), 210);
    }

    #[test]
    fn test_cell_event_has_position() {
        let event = MapEvent::CellChanged {
            x: 2,
            y: 3,
            old: CellType::Wall,
            new: CellType::Empty,
        };
        let value = event_json(&event, 30).unwrap();
        assert_eq!(value["event"], "cell_changed");
        assert_eq!(value["left"], 60);
        assert_eq!(value["top"], 90);
    }

    #[test]
    fn test_grid_event_has_no_position() {
        let value = event_json(&MapEvent::GridCreated { cols: 4, rows: 2 }, 30).unwrap();
        assert!(value.get("left").is_none());
        assert_eq!(value["cols"], 4);
    }

    #[test]
    fn test_write_events_one_per_line() {
        let events = vec![
            MapEvent::GridCreated { cols: 1, rows: 1 },
            MapEvent::CellChanged {
                x: 0,
                y: 0,
                old: CellType::Wall,
                new: CellType::Empty,
            },
        ];
        let mut out = Vec::new();
        write_events(&mut out, &events, 10).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_map_and_census() {
        let mut grid = GridMap::new(3, 1);
        grid.set(1, 0, CellType::Item(ItemKind::Resource)).unwrap();

        let mut out = Vec::new();
        write_map(&mut out, &grid).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("#r#\n"));
        assert!(text.contains("resource (r): 1"));
        assert!(text.contains("enemy (E): 0"));
    }
}
