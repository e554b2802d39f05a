//! Brick Breaker - A classic brick breaker arcade game
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (kinematics, collisions, frame state)
//! - `session`: Level progression, lives, game over and victory prompts
//! - `input`: Key events consumed by the simulation
//! - `renderer`: Display list built from the session each frame
//! - `platform`: Native window, keyboard mapping and tick pacing
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::{Phase, PromptKind, Session};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: u32 = 768;
    pub const SCREEN_HEIGHT: u32 = 768;

    /// Brick cell size; the board is SCREEN / BRICK cells in each direction
    pub const BRICK_WIDTH: u32 = 48;
    pub const BRICK_HEIGHT: u32 = 24;

    /// Paddle defaults
    pub const PADDLE_WIDTH: u32 = 76;
    pub const PADDLE_HEIGHT: u32 = 24;
    /// Paddle speed while an arrow key is held (pixels/s)
    pub const PADDLE_SPEED: f32 = 512.0;
    /// Share of paddle velocity handed to the ball on contact
    pub const PADDLE_FRICTION: f32 = 0.2;
    /// Length of the aiming line drawn while locked
    pub const PADDLE_SIGHT_LEN: f32 = 100.0;
    /// Aim change per key press (radians)
    pub const PADDLE_AIM_STEP: f32 = PI / 64.0;

    /// Ball defaults
    pub const BALL_RADIUS: u32 = 8;
    pub const BALL_SPEED: f32 = 600.0;

    /// Launch angle limits (radians, PI/2 is straight up)
    pub const MIN_LAUNCH_ANGLE: f32 = PI / 8.0;
    pub const MAX_LAUNCH_ANGLE: f32 = 7.0 * PI / 8.0;

    pub const STARTING_LIVES: u32 = 5;
    pub const BRICK_SCORE: u64 = 10;

    /// Wall-clock interval between ticks (10ms)
    pub const TICK_MICROS: u64 = 10_000;

    /// Line height for HUD and prompt text
    pub const TEXT_HEIGHT: f32 = 12.0;

    /// Directory holding `{n}.level` files
    pub const LEVEL_DIR: &str = "levels";
}
