//! Fixed-timestep simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only (simulated dt never follows the wall clock)
//! - One brick resolved per tick, scanned in row-major order
//! - No rendering or platform dependencies

pub mod board;
pub mod collision;
pub mod geometry;
pub mod kinematics;
pub mod state;
pub mod tick;

pub use board::{Board, level_path};
pub use collision::{BrickHit, ball_board_collision, ball_paddle_collision};
pub use geometry::{Rect, intersects, signum};
pub use kinematics::{integrate_ball, integrate_paddle};
pub use state::{Ball, Color, GameState, Paddle, Score};
pub use tick::{FrameState, process_input, tick};
