//! Simulation tests - gravity, pushing, keys, and command ordering through `Game`

use tui_boulder::core::{FallingState, Game, Level, LevelRules, Tile};
use tui_boulder::types::{Command, TileCode};

fn game(rows: &[&[u8]]) -> Game {
    Game::new(Level::from_rows(rows, LevelRules::default()).expect("valid test level"))
}

fn code_at(game: &Game, x: i32, y: i32) -> TileCode {
    game.grid().get(x, y).expect("in bounds").code()
}

#[test]
fn test_settled_grid_is_unchanged_by_gravity() {
    let mut g = Game::default();
    let before = g.grid().clone();

    assert!(!g.tick());
    assert_eq!(g.grid(), &before);
    assert!(!g.tick());
    assert_eq!(g.grid(), &before);
}

#[test]
fn test_resting_stone_drops_one_row_into_single_gap() {
    // Stone at (2,1), air at (2,2), flux at (2,3).
    let mut g = game(&[
        &[2, 2, 2, 2, 2],
        &[2, 3, 4, 1, 2],
        &[2, 1, 0, 1, 2],
        &[2, 1, 1, 1, 2],
        &[2, 2, 2, 2, 2],
    ]);
    assert_eq!(code_at(&g, 2, 1), TileCode::Stone);

    g.tick();

    assert_eq!(code_at(&g, 2, 1), TileCode::Air);
    assert_eq!(
        g.grid().get(2, 2),
        Some(Tile::Stone(FallingState::Falling))
    );
    assert_eq!(code_at(&g, 2, 3), TileCode::Flux);

    // Next tick it lands and rests.
    g.tick();
    assert_eq!(code_at(&g, 2, 2), TileCode::Stone);
}

#[test]
fn test_falling_codes_settle_on_first_tick_when_supported() {
    let mut g = game(&[
        &[2, 2, 2, 2],
        &[2, 3, 5, 2],
        &[2, 1, 7, 2],
        &[2, 1, 1, 2],
        &[2, 2, 2, 2],
    ]);
    g.tick();
    assert_eq!(code_at(&g, 2, 1), TileCode::Stone);
    assert_eq!(code_at(&g, 2, 2), TileCode::Box);
}

#[test]
fn test_push_box_onto_supported_air() {
    // Player (1,1), box (2,1), air (3,1) over flux (3,2).
    let mut g = game(&[
        &[2, 2, 2, 2, 2, 2],
        &[2, 3, 6, 0, 1, 2],
        &[2, 1, 1, 1, 1, 2],
        &[2, 2, 2, 2, 2, 2],
    ]);
    g.push_command(Command::Right);
    g.tick();

    assert_eq!(g.player_position(), (2, 1));
    assert_eq!(code_at(&g, 3, 1), TileCode::Box);
    assert_eq!(code_at(&g, 2, 1), TileCode::Player);
    assert_eq!(code_at(&g, 1, 1), TileCode::Air);
    assert!(g.marker_in_sync());
}

#[test]
fn test_push_into_occupied_cell_changes_nothing() {
    let mut g = game(&[
        &[2, 2, 2, 2, 2, 2],
        &[2, 3, 6, 1, 1, 2],
        &[2, 1, 1, 1, 1, 2],
        &[2, 2, 2, 2, 2, 2],
    ]);
    let before = g.grid().clone();
    g.push_command(Command::Right);
    g.tick();

    assert_eq!(g.grid(), &before);
    assert_eq!(g.player_position(), (1, 1));
}

#[test]
fn test_push_over_gap_changes_nothing() {
    let mut g = game(&[
        &[2, 2, 2, 2, 2, 2],
        &[2, 3, 6, 0, 1, 2],
        &[2, 1, 1, 0, 1, 2],
        &[2, 1, 1, 1, 1, 2],
        &[2, 2, 2, 2, 2, 2],
    ]);
    let before = g.grid().clone();
    g.push_command(Command::Right);
    g.tick();

    assert_eq!(g.grid(), &before);
    assert_eq!(g.player_position(), (1, 1));
}

#[test]
fn test_falling_box_cannot_be_pushed() {
    // Box starts falling over flux: the push is evaluated before gravity
    // settles it, so the first tick's push is refused.
    let mut g = game(&[
        &[2, 2, 2, 2, 2, 2],
        &[2, 3, 7, 0, 1, 2],
        &[2, 1, 1, 1, 1, 2],
        &[2, 2, 2, 2, 2, 2],
    ]);
    g.push_command(Command::Right);
    g.tick();
    assert_eq!(g.player_position(), (1, 1));
    assert_eq!(code_at(&g, 2, 1), TileCode::Box);

    // Settled now: the same push succeeds.
    g.push_command(Command::Right);
    g.tick();
    assert_eq!(g.player_position(), (2, 1));
    assert_eq!(code_at(&g, 3, 1), TileCode::Box);
}

#[test]
fn test_key1_clears_yellow_locks_only() {
    // Key1 at (2,1); Lock1 at (4,1) and (4,3); Lock2 at (4,2).
    let mut g = game(&[
        &[2, 2, 2, 2, 2, 2],
        &[2, 3, 8, 1, 9, 2],
        &[2, 1, 1, 1, 11, 2],
        &[2, 1, 1, 1, 9, 2],
        &[2, 2, 2, 2, 2, 2],
    ]);
    g.push_command(Command::Right);
    g.tick();

    assert_eq!(g.player_position(), (2, 1));
    assert_eq!(code_at(&g, 4, 1), TileCode::Air);
    assert_eq!(code_at(&g, 4, 3), TileCode::Air);
    assert_eq!(code_at(&g, 4, 2), TileCode::Lock2);
    assert!(g.marker_in_sync());
}

#[test]
fn test_key2_clears_blue_locks_only() {
    let mut g = game(&[
        &[2, 2, 2, 2, 2],
        &[2, 3, 11, 9, 2],
        &[2, 10, 1, 1, 2],
        &[2, 2, 2, 2, 2],
    ]);
    g.push_command(Command::Down);
    g.tick();

    assert_eq!(g.player_position(), (1, 2));
    assert_eq!(code_at(&g, 2, 1), TileCode::Air);
    assert_eq!(code_at(&g, 3, 1), TileCode::Lock1);
}

#[test]
fn test_locks_block_until_key_taken() {
    let mut g = game(&[
        &[2, 2, 2, 2, 2, 2],
        &[2, 8, 3, 9, 1, 2],
        &[2, 2, 2, 2, 2, 2],
    ]);
    g.push_command(Command::Right);
    g.tick();
    assert_eq!(g.player_position(), (2, 1));

    g.push_command(Command::Left);
    g.tick();
    assert_eq!(g.player_position(), (1, 1));

    g.push_command(Command::Right);
    g.tick();
    g.push_command(Command::Right);
    g.tick();
    assert_eq!(g.player_position(), (3, 1));
}

#[test]
fn test_lock_removal_lets_stone_fall_same_tick() {
    // Stone (3,1) rests on Lock1 (3,2); taking the key removes the lock
    // during input handling, and the sweep that follows drops the stone.
    let mut g = game(&[
        &[2, 2, 2, 2, 2],
        &[2, 3, 8, 4, 2],
        &[2, 1, 1, 9, 2],
        &[2, 1, 1, 1, 2],
        &[2, 2, 2, 2, 2],
    ]);
    g.push_command(Command::Right);
    g.tick();

    assert_eq!(code_at(&g, 3, 1), TileCode::Air);
    assert_eq!(code_at(&g, 3, 2), TileCode::FallingStone);
}

#[test]
fn test_commands_drain_last_in_first_out() {
    // Player at (2,1), wall at (3,1). Queue [Left, Right]:
    // LIFO applies Right (blocked) then Left -> (1,1).
    // FIFO would give Left -> (1,1) then Right -> (2,1).
    let mut g = game(&[
        &[2, 2, 2, 2, 2],
        &[2, 0, 3, 2, 2],
        &[2, 2, 2, 2, 2],
    ]);
    g.push_command(Command::Left);
    g.push_command(Command::Right);
    g.tick();

    assert_eq!(g.player_position(), (1, 1));
    assert!(g.pending().is_empty());
}

#[test]
fn test_canonical_level_right_then_tick() {
    let mut g = Game::default();
    assert_eq!(g.player_position(), (1, 1));
    let before = g.grid().clone();

    g.push_command(Command::Right);
    g.tick();

    assert_eq!(g.player_position(), (2, 1));
    for y in 0..before.height() as i32 {
        for x in 0..before.width() as i32 {
            let expected = match (x, y) {
                (1, 1) => Some(Tile::Air),
                (2, 1) => Some(Tile::Player),
                _ => before.get(x, y),
            };
            assert_eq!(g.grid().get(x, y), expected, "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_marker_stays_in_sync_under_random_play() {
    // Deterministic xorshift so the sequence is reproducible.
    let mut state: u32 = 0x9e37_79b9;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    let commands = [Command::Left, Command::Right, Command::Up, Command::Down];

    let mixed: [[u8; 8]; 6] = [
        [2, 2, 2, 2, 2, 2, 2, 2],
        [2, 3, 0, 6, 0, 4, 0, 2],
        [2, 1, 0, 8, 0, 0, 10, 2],
        [2, 0, 4, 1, 9, 0, 11, 2],
        [2, 1, 0, 0, 1, 7, 0, 2],
        [2, 2, 2, 2, 2, 2, 2, 2],
    ];
    let levels = [
        Level::canonical(),
        Level::from_rows(&mixed, LevelRules::default()).unwrap(),
    ];

    for level in levels {
        let mut g = Game::new(level);
        for _ in 0..500 {
            let burst = next() % 4;
            for _ in 0..burst {
                g.push_command(commands[(next() % 4) as usize]);
            }
            g.tick();
            assert!(g.marker_in_sync(), "marker out of sync at tick {}", g.tick_count());
        }
    }
}
