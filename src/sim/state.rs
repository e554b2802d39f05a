//! Game state and core simulation types
//!
//! The session owns one [`GameState`] and lends its parts to the
//! simulation functions for the duration of a tick.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::geometry::Rect;
use crate::consts::{MAX_LAUNCH_ANGLE, MIN_LAUNCH_ANGLE};
use crate::tuning::Tuning;

/// 8-bit RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Aim line
    pub const SIGHT: Color = Color::rgb(128, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Lives left in the run (carried across levels)
    pub lives: u32,
    /// False once the ball dropped below the screen
    pub alive: bool,
    pub color: Color,
}

impl Ball {
    pub fn new(radius: f32, lives: u32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            lives,
            alive: true,
            color: Color::WHITE,
        }
    }

    /// Bounding box used for collision queries
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.radius)
    }

    /// Lose a life. Only the first call per fall counts.
    pub fn kill(&mut self) {
        if self.alive {
            self.lives = self.lives.saturating_sub(1);
            self.alive = false;
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// Horizontal only; `vel.y` stays 0
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: Color,
    /// Ball not launched yet; arrow keys aim instead of moving
    pub locked: bool,
    /// Launch direction (radians, PI/2 = straight up)
    pub launch_angle: f32,
}

impl Paddle {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            width,
            height,
            color: Color::WHITE,
            locked: true,
            launch_angle: FRAC_PI_2,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Rotate the aim counter-clockwise (towards the left wall)
    pub fn aim_left(&mut self, step: f32) {
        self.launch_angle = (self.launch_angle + step).min(MAX_LAUNCH_ANGLE);
    }

    /// Rotate the aim clockwise (towards the right wall)
    pub fn aim_right(&mut self, step: f32) {
        self.launch_angle = (self.launch_angle - step).max(MIN_LAUNCH_ANGLE);
    }

    /// Unit launch direction in screen space (y grows down)
    pub fn launch_direction(&self) -> Vec2 {
        Vec2::new(self.launch_angle.cos(), -self.launch_angle.sin())
    }

    /// Release the ball along the launch angle. No-op once unlocked.
    pub fn launch(&mut self, ball: &mut Ball, speed: f32) {
        if self.locked {
            self.locked = false;
            ball.vel = self.launch_direction() * speed;
        }
    }
}

/// Running score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    total: u64,
}

impl Score {
    /// Add `delta` and return the new total (`add(0)` just reads it)
    pub fn add(&mut self, delta: u64) -> u64 {
        self.total = self.total.saturating_add(delta);
        self.total
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn reset(&mut self) {
        self.total = 0;
    }
}

/// Everything a run mutates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    pub board: Board,
    pub score: Score,
    /// Current level number (1-based)
    pub level: u32,
}

impl GameState {
    /// Fresh run on an empty board, entities in their serve positions
    pub fn new(tuning: &Tuning) -> Self {
        let mut state = Self {
            ball: Ball::new(tuning.ball_radius as f32, tuning.lives),
            paddle: Paddle::new(tuning.paddle_width as f32, tuning.paddle_height as f32),
            board: Board::from_tuning(tuning),
            score: Score::default(),
            level: 1,
        };
        state.reset_entities(tuning);
        state
    }

    /// Center the paddle, sit the ball on it and lock for aiming.
    ///
    /// Lives, score and board are left alone.
    pub fn reset_entities(&mut self, tuning: &Tuning) {
        let paddle = &mut self.paddle;
        paddle.pos = Vec2::new(
            (tuning.screen_width.saturating_sub(tuning.paddle_width) / 2) as f32,
            tuning
                .screen_height
                .saturating_sub(tuning.paddle_height.saturating_mul(2)) as f32,
        );
        paddle.vel = Vec2::ZERO;
        paddle.locked = true;
        paddle.launch_angle = FRAC_PI_2;

        let ball = &mut self.ball;
        ball.pos = Vec2::new(paddle.center_x(), paddle.pos.y - ball.radius - 1.0);
        ball.vel = Vec2::ZERO;
        ball.alive = true;
    }

    /// Back to full lives and zero score, on level 1. The board is not reloaded.
    pub fn restart(&mut self, tuning: &Tuning) {
        self.ball.lives = tuning.lives;
        self.score.reset();
        self.level = 1;
    }
}
