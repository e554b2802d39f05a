//! Presentation adapter
//!
//! Turns the session into a flat display list; the platform layer replays it
//! with whatever drawing backend it has.

pub mod scene;

pub use scene::{DrawCmd, brick_color, build_scene};
