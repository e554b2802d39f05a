//! Data-driven game balance
//!
//! Every number the simulation needs lives here so a run can be retuned
//! without a rebuild. Loaded from an optional JSON file next to the binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: u32,
    pub screen_height: u32,
    pub brick_width: u32,
    pub brick_height: u32,

    // === Paddle ===
    pub paddle_width: u32,
    pub paddle_height: u32,
    /// Paddle speed (pixels/s)
    pub paddle_speed: f32,
    /// Fraction of paddle velocity added to the ball on contact
    pub paddle_friction: f32,
    /// Aim line length while locked
    pub sight_len: f32,
    /// Aim change per key press (radians)
    pub aim_step: f32,

    // === Ball ===
    pub ball_radius: u32,
    /// Launch speed (pixels/s)
    pub ball_speed: f32,

    // === Rules ===
    pub lives: u32,
    pub brick_score: u64,

    // === Timing ===
    /// Interval between ticks; also the fixed simulation step
    pub tick_micros: u64,

    /// Where `{n}.level` files are looked up
    pub level_dir: PathBuf,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_friction: PADDLE_FRICTION,
            sight_len: PADDLE_SIGHT_LEN,
            aim_step: PADDLE_AIM_STEP,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            lives: STARTING_LIVES,
            brick_score: BRICK_SCORE,

            tick_micros: TICK_MICROS,

            level_dir: PathBuf::from(LEVEL_DIR),
        }
    }
}

impl Tuning {
    /// File looked up in the working directory by [`Tuning::load`]
    const FILE_NAME: &'static str = "brick-breaker.json";

    /// Screen size in pixels
    pub fn screen(&self) -> Vec2 {
        Vec2::new(self.screen_width as f32, self.screen_height as f32)
    }

    /// Brick cell size in pixels
    pub fn brick_size(&self) -> Vec2 {
        Vec2::new(self.brick_width as f32, self.brick_height as f32)
    }

    /// Board columns (screen width / brick width)
    pub fn board_cols(&self) -> usize {
        self.screen_width.checked_div(self.brick_width).unwrap_or(0) as usize
    }

    /// Board rows (screen height / brick height)
    pub fn board_rows(&self) -> usize {
        self.screen_height.checked_div(self.brick_height).unwrap_or(0) as usize
    }

    /// Fixed simulation timestep in seconds
    pub fn sim_dt(&self) -> f32 {
        self.tick_micros as f32 / 1_000_000.0
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.screen_width == 0 || self.screen_height == 0 {
            bail!("screen size must be non-zero");
        }
        if self.brick_width == 0 || self.brick_height == 0 {
            bail!("brick size must be non-zero");
        }
        if self.brick_width > self.screen_width || self.brick_height > self.screen_height {
            bail!(
                "brick {}x{} does not fit on a {}x{} screen",
                self.brick_width,
                self.brick_height,
                self.screen_width,
                self.screen_height
            );
        }
        if self.paddle_width == 0 || self.paddle_width > self.screen_width {
            bail!("paddle width {} must be in 1..={}", self.paddle_width, self.screen_width);
        }
        if self.paddle_height == 0 || self.paddle_height > self.screen_height / 2 {
            bail!("paddle height {} does not fit the screen", self.paddle_height);
        }
        if self.ball_radius == 0 {
            bail!("ball radius must be non-zero");
        }
        if self.tick_micros == 0 {
            bail!("tick interval must be non-zero");
        }
        if self.lives == 0 {
            bail!("a run needs at least one life");
        }
        for (name, value) in [
            ("ball_speed", self.ball_speed),
            ("paddle_speed", self.paddle_speed),
            ("paddle_friction", self.paddle_friction),
            ("sight_len", self.sight_len),
            ("aim_step", self.aim_step),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("{name} must be a finite, non-negative number (got {value})");
            }
        }
        Ok(())
    }

    /// Load tuning from a JSON file; missing fields take their defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading tuning file {}", path.display()))?;
        let tuning = serde_json::from_str(&json)
            .with_context(|| format!("parsing tuning file {}", path.display()))?;
        Ok(tuning)
    }

    /// Load `brick-breaker.json` from the working directory, or fall back to defaults
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("No {} found, using default tuning", Self::FILE_NAME);
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(err) => {
                log::warn!("Ignoring tuning file: {err:#}");
                Self::default()
            }
        }
    }
}
