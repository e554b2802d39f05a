//! Brick Breaker entry point
//!
//! Loads tuning, then runs the game window until the player quits.

use brick_breaker::{Tuning, platform};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Brick Breaker starting...");

    let tuning = Tuning::load();
    tuning.validate()?;
    log::info!(
        "Board {}x{} bricks, levels from {}",
        tuning.board_cols(),
        tuning.board_rows(),
        tuning.level_dir.display()
    );

    platform::run(tuning)?;

    log::info!("Goodbye");
    Ok(())
}
