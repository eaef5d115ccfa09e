//! Full game-loop tests: session budget, swap resolution, and scoring
//! working together the way a frontend would drive them.

use match_three::core::{
    GeneratorConfig, Grid, SimpleRng, TileGenerator, TilePool,
};
use match_three::engine::{
    resolve_swap_complete, score_cascade, ScoreTable, Session, SessionStatus,
};
use match_three::types::{Direction, GridSize, Position, TileColor, TileDefinition};

fn tile(color: TileColor) -> TileDefinition {
    TileDefinition::plain(color)
}

/// Stable four-color checkerboard with a purple column one swap from done.
fn one_move_grid() -> Grid {
    let mut grid = Grid::new(GridSize::Small);
    let palette = [
        TileColor::Red,
        TileColor::Green,
        TileColor::Blue,
        TileColor::Yellow,
    ];
    for pos in grid.positions().collect::<Vec<_>>() {
        let idx = ((pos.row as usize) % 2) * 2 + (pos.col as usize) % 2;
        grid.set(pos, Some(tile(palette[idx])));
    }
    grid.set(Position::new(0, 1), Some(tile(TileColor::Purple)));
    grid.set(Position::new(1, 1), Some(tile(TileColor::Purple)));
    grid.set(Position::new(2, 2), Some(tile(TileColor::Purple)));
    grid
}

fn refill_generator(seed: u32) -> TileGenerator {
    let pool = TilePool::of_colors(&[TileColor::Purple, TileColor::Orange]).unwrap();
    TileGenerator::new(pool, GeneratorConfig::default(), SimpleRng::new(seed))
}

/// One frontend turn: spend the swap, resolve it, bank any points.
fn play_swap(
    session: &mut Session,
    grid: &mut Grid,
    generator: &mut TileGenerator,
    from: Position,
    direction: Direction,
) {
    session.record_attempt();
    if let Ok(passes) = resolve_swap_complete(grid, generator, from, direction) {
        session.add_score(score_cascade(&ScoreTable::default(), &passes));
    }
}

#[test]
fn test_rejected_swaps_consume_the_budget() {
    let mut grid = one_move_grid();
    let mut generator = refill_generator(5);
    let mut session = Session::new(3, 100);

    // Three swaps into a corner that can never match.
    for _ in 0..3 {
        play_swap(
            &mut session,
            &mut grid,
            &mut generator,
            Position::new(4, 0),
            Direction::Right,
        );
    }

    assert_eq!(session.score(), 0);
    assert_eq!(session.swaps_remaining(), 0);
    assert_eq!(session.status(), SessionStatus::Failed);
}

#[test]
fn test_winning_session() {
    let mut grid = one_move_grid();
    let mut generator = refill_generator(5);
    let mut session = Session::new(1, 3);

    play_swap(
        &mut session,
        &mut grid,
        &mut generator,
        Position::new(2, 2),
        Direction::Left,
    );

    // Three plain tiles destroyed at one point each, at minimum.
    assert!(session.score() >= 3);
    assert_eq!(session.status(), SessionStatus::Won);
}

#[test]
fn test_mixed_session_falls_short() {
    let mut grid = one_move_grid();
    let mut generator = refill_generator(5);
    let mut session = Session::new(2, 1000);

    // One wasted swap, one productive swap; target stays out of reach.
    play_swap(
        &mut session,
        &mut grid,
        &mut generator,
        Position::new(4, 0),
        Direction::Right,
    );
    assert_eq!(session.status(), SessionStatus::InProgress);

    play_swap(
        &mut session,
        &mut grid,
        &mut generator,
        Position::new(2, 2),
        Direction::Left,
    );

    assert!(session.score() > 0);
    assert!(session.score() < 1000);
    assert_eq!(session.status(), SessionStatus::Failed);
}

#[test]
fn test_default_session_parameters() {
    let session = Session::default();
    assert_eq!(session.swaps_remaining(), 10);
    assert_eq!(session.target_score(), 20);
}
