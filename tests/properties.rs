//! Property-based tests for the game cores.
//!
//! These use proptest to generate random inputs and verify invariants:
//! - Hill climb speed stays inside its bounds for any throttle sequence
//! - Coin collection only ever grows and never double-scores
//! - Terrain is a pure, continuous function of x
//! - Minimax scores are symmetric under swapping the players
//! - Stacked blocks never grow wider

use love_arcade::consts::*;
use love_arcade::sim::{
    Board, DropResult, HillClimbInput, HillClimbState, Mark, StackGame, Throttle, best_move,
    minimax, step, terrain_y,
};
use proptest::prelude::*;

// =============================================================================
// Strategies for generating test inputs
// =============================================================================

fn arb_throttle() -> impl Strategy<Value = Throttle> {
    prop_oneof![
        Just(Throttle::Reverse),
        Just(Throttle::Idle),
        Just(Throttle::Accelerate),
    ]
}

/// Runs of held throttle, like a player holding buttons
fn arb_drive() -> impl Strategy<Value = Vec<(Throttle, usize, bool)>> {
    proptest::collection::vec((arb_throttle(), 1usize..200, proptest::bool::weighted(0.05)), 1..20)
}

/// A position reached by alternating play from an empty board, X first.
/// At least three moves are made so the search stays small.
fn arb_position() -> impl Strategy<Value = Board> {
    proptest::collection::vec(0usize..9, 3..9).prop_map(|picks| {
        let mut board = Board::new();
        let mut side = Mark::X;
        for pick in picks {
            if board.outcome().is_some() {
                break;
            }
            let empty: Vec<usize> = board.empty_cells().collect();
            board.place(empty[pick % empty.len()], side).unwrap();
            side = side.opposite();
        }
        board
    })
}

// =============================================================================
// Hill climb
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_speed_stays_bounded(drive in arb_drive()) {
        let mut state = HillClimbState::new();
        state.start();
        for (throttle, frames, brake) in drive {
            for frame in 0..frames {
                let input = HillClimbInput { throttle, brake: brake && frame == 0 };
                step(&mut state, &input);
                prop_assert!(state.speed <= MAX_SPEED);
                prop_assert!(state.speed >= -MAX_SPEED * REVERSE_RATIO);
            }
        }
    }

    #[test]
    fn prop_coins_monotonic(drive in arb_drive()) {
        let mut state = HillClimbState::new();
        state.start();
        for (throttle, frames, _) in drive {
            let input = HillClimbInput { throttle, brake: false };
            for _ in 0..frames {
                let before = state.collected.clone();
                let picked = step(&mut state, &input);
                prop_assert!(before.is_subset(&state.collected));
                for coin in &picked {
                    prop_assert!(!before.contains(coin));
                }
                prop_assert_eq!(state.collected.len(), before.len() + picked.len());
                prop_assert_eq!(state.coins as usize, state.collected.len());
            }
        }
    }

    #[test]
    fn prop_car_stays_above_ground(drive in arb_drive()) {
        let mut state = HillClimbState::new();
        state.start();
        for (throttle, frames, brake) in drive {
            for frame in 0..frames {
                let input = HillClimbInput { throttle, brake: brake && frame == 0 };
                step(&mut state, &input);
                prop_assert!(state.car_y < terrain_y(state.world_x));
            }
        }
    }

    #[test]
    fn prop_terrain_pure_and_continuous(x in -1.0e5f64..1.0e5, h in -5.0f64..5.0) {
        prop_assert_eq!(terrain_y(x), terrain_y(x));
        // Summed wave slopes: 16*0.01 + 8*0.021 + 12*0.005 < 0.4
        prop_assert!((terrain_y(x + h) - terrain_y(x)).abs() <= 0.4 * h.abs() + 1e-9);
    }
}

// =============================================================================
// Tic-tac-toe
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_minimax_swap_symmetry(board in arb_position()) {
        let mut original = board;
        let mut swapped = board.swapped();
        let o_to_move = minimax(&mut original, 0, true, Mark::O);
        prop_assert_eq!(o_to_move, minimax(&mut swapped, 0, true, Mark::X));
        // Same mover, opposite maximizing side: the score flips sign
        prop_assert_eq!(minimax(&mut original, 0, false, Mark::X), -o_to_move);
        prop_assert_eq!(original, board);
    }

    #[test]
    fn prop_best_move_is_empty_cell(board in arb_position()) {
        match best_move(&board, Mark::O) {
            Some(cell) => prop_assert!(board.get(cell).is_none()),
            None => prop_assert!(board.is_full()),
        }
    }

    #[test]
    fn prop_best_move_mirrors_under_swap(board in arb_position()) {
        prop_assert_eq!(best_move(&board, Mark::O), best_move(&board.swapped(), Mark::X));
    }
}

// =============================================================================
// Stacking
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_stack_never_widens(waits in proptest::collection::vec(0usize..200, 1..30)) {
        let mut game = StackGame::new();
        game.start();
        for wait in waits {
            for _ in 0..wait {
                game.tick();
            }
            let before = game.top().w;
            match game.drop_block() {
                DropResult::Placed { width, .. } => {
                    prop_assert!(width <= before);
                    prop_assert!(width > 0.0);
                }
                DropResult::Missed | DropResult::Ignored => break,
            }
        }
    }
}
