//! Platform abstraction layer
//!
//! Handles the desktop side of the game:
//! - Window creation
//! - Keyboard events
//! - Tick pacing
//! - Painting the display list

pub mod native;

pub use native::{BreakoutApp, map_key, run};
