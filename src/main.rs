//! Love Arcade entry point
//!
//! The browser build is a library (see `web`); natively this runs a short
//! headless demo of the two algorithmic games.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Love Arcade (native) starting...");
    log::info!("Native mode is headless - build with `wasm-pack` for the web page");

    println!("\nDriving the hill climb...");
    demo_hill_climb();

    println!("\nComputer vs computer tic-tac-toe...");
    demo_tictactoe();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_init, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_hill_climb() {
    use love_arcade::sim::{HillClimbInput, HillClimbState, Throttle, step};

    let mut state = HillClimbState::new();
    state.start();

    // Floor it, coast, then back up a little
    let plan = [
        (Throttle::Accelerate, 600),
        (Throttle::Idle, 200),
        (Throttle::Reverse, 120),
    ];
    for (throttle, frames) in plan {
        let input = HillClimbInput {
            throttle,
            ..Default::default()
        };
        for _ in 0..frames {
            step(&mut state, &input);
        }
        println!(
            "  {:?} x{}: dist {} m, coins {}, speed {:.3}",
            throttle, frames, state.distance, state.coins, state.speed
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_tictactoe() {
    use love_arcade::sim::{Board, Mark, best_move};

    let mut board = Board::new();
    let mut mover = Mark::X;
    while board.outcome().is_none() {
        let Some(cell) = best_move(&board, mover) else {
            break;
        };
        if let Err(e) = board.place(cell, mover) {
            log::error!("Search picked an illegal cell: {}", e);
            return;
        }
        mover = mover.opposite();
    }
    print!("{}", board);
    println!("  Result: {:?}", board.outcome());
}
