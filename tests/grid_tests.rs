//! Grid construction and layout-loading tests against the public facade.

use match_three::core::{Grid, Slot};
use match_three::types::{
    GridSize, LayoutError, Position, SwapRejection, TileColor, TileDefinition, TileEffect,
};

/// Layouts arrive as JSON rows of optional tiles, the same shape a level
/// file would carry.
const SMALL_LAYOUT: &str = r#"[
    [{"color":"Red","effect":"Plain"},    {"color":"Green","effect":"Plain"}, {"color":"Blue","effect":"Plain"},  {"color":"Green","effect":"Plain"}, {"color":"Red","effect":"Plain"}],
    [{"color":"Blue","effect":"Plain"},   {"color":"Red","effect":"Wall"},    {"color":"Green","effect":"Plain"}, {"color":"Red","effect":"Plain"},   {"color":"Blue","effect":"Plain"}],
    [{"color":"Green","effect":"Plain"},  {"color":"Blue","effect":"Plain"},  null,                               {"color":"Blue","effect":"Plain"},  {"color":"Green","effect":"Plain"}],
    [{"color":"Blue","effect":"Plain"},   {"color":"Red","effect":"AreaBomb"},{"color":"Green","effect":"Plain"}, {"color":"Red","effect":"Plain"},   {"color":"Blue","effect":"Plain"}],
    [{"color":"Red","effect":"Plain"},    {"color":"Green","effect":"Plain"}, {"color":"Blue","effect":"ClearRow"},{"color":"Green","effect":"Plain"},{"color":"Red","effect":"Plain"}]
]"#;

fn load_small() -> Grid {
    let rows: Vec<Vec<Slot>> = serde_json::from_str(SMALL_LAYOUT).unwrap();
    Grid::from_rows(GridSize::Small, rows).unwrap()
}

#[test]
fn test_layout_round_trips_tiles() {
    let grid = load_small();

    assert_eq!(
        grid.tile(Position::new(0, 0)),
        Some(TileDefinition::plain(TileColor::Red))
    );
    assert!(grid.is_wall(Position::new(1, 1)));
    assert!(grid.is_empty(Position::new(2, 2)));
    assert_eq!(
        grid.tile(Position::new(3, 1)),
        Some(TileDefinition::new(TileColor::Red, TileEffect::AreaBomb))
    );
    assert_eq!(
        grid.tile(Position::new(4, 2)),
        Some(TileDefinition::new(TileColor::Blue, TileEffect::ClearRow))
    );
}

#[test]
fn test_layout_shape_is_validated() {
    let rows: Vec<Vec<Slot>> = serde_json::from_str(SMALL_LAYOUT).unwrap();
    let err = Grid::from_rows(GridSize::Medium, rows).unwrap_err();
    assert_eq!(
        err,
        LayoutError::BadRowCount {
            expected: 7,
            actual: 5
        }
    );

    let mut ragged: Vec<Vec<Slot>> = serde_json::from_str(SMALL_LAYOUT).unwrap();
    ragged[3].pop();
    let err = Grid::from_rows(GridSize::Small, ragged).unwrap_err();
    assert_eq!(
        err,
        LayoutError::BadRowWidth {
            row: 3,
            expected: 5,
            actual: 4
        }
    );
}

#[test]
fn test_grid_sizes() {
    assert_eq!(Grid::new(GridSize::Small).cells().len(), 25);
    assert_eq!(Grid::new(GridSize::Medium).cells().len(), 49);
    assert_eq!(Grid::new(GridSize::Large).cells().len(), 81);
}

#[test]
fn test_out_of_bounds_reads_are_none() {
    let grid = load_small();
    assert_eq!(grid.get(Position::new(-1, 0)), None);
    assert_eq!(grid.get(Position::new(0, 5)), None);
    // In-bounds empty is Some(None), distinct from out-of-bounds.
    assert_eq!(grid.get(Position::new(2, 2)), Some(None));
}

#[test]
fn test_walls_are_immovable_and_indestructible() {
    let mut grid = load_small();
    let wall = Position::new(1, 1);

    assert_eq!(
        grid.swap(wall, Position::new(1, 2)),
        Err(SwapRejection::IllegalTarget)
    );
    assert_eq!(grid.clear_slot(wall), None);
    assert!(grid.is_wall(wall));
}

#[test]
fn test_clear_slot_returns_the_removed_tile() {
    let mut grid = load_small();
    let bomb = Position::new(3, 1);

    let removed = grid.clear_slot(bomb);
    assert_eq!(
        removed,
        Some(TileDefinition::new(TileColor::Red, TileEffect::AreaBomb))
    );
    assert!(grid.is_empty(bomb));
    // Clearing an already-empty slot is a no-op.
    assert_eq!(grid.clear_slot(bomb), None);
}
