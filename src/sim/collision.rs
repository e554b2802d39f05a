//! Collision detection and response
//!
//! Both resolvers work on the ball's bounding box and the overlap rectangle
//! it forms with the brick or paddle. An overlap narrower than it is tall
//! means the ball came in from the side.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::geometry::{Rect, intersects, signum};
use super::state::{Ball, Paddle, Score};

/// A brick the ball just struck
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickHit {
    pub row: usize,
    pub col: usize,
    /// Hit points left after this hit
    pub remaining: u8,
    pub overlap: Rect,
}

/// Resolve the ball against the board.
///
/// Cells are scanned row-major and only the first brick touching the ball is
/// resolved, so a frame never scores more than one brick.
pub fn ball_board_collision(
    ball: &mut Ball,
    board: &mut Board,
    score: &mut Score,
    brick_points: u64,
) -> Option<BrickHit> {
    let bounds = ball.bounds();
    let (row, col, brick, overlap) = board.bricks().find_map(|(row, col, _)| {
        let brick = board.cell_rect(row, col);
        intersects(brick, bounds).map(|overlap| (row, col, brick, overlap))
    })?;

    let remaining = board.hit(row, col).unwrap_or(0);
    score.add(brick_points);

    // Push the ball clear of the brick on the side it came from
    if ball.vel.y < 0.0 {
        ball.pos.y = brick.bottom() + ball.radius + 1.0;
    } else {
        ball.pos.y = brick.y - ball.radius - 1.0;
    }
    ball.vel.y = -ball.vel.y;

    if overlap.w < overlap.h {
        ball.pos.x -= signum(ball.vel.x) as f32 * overlap.w;
        ball.vel.x = -ball.vel.x;
    }

    log::debug!("Brick ({row}, {col}) hit, {remaining} hp left");

    Some(BrickHit {
        row,
        col,
        remaining,
        overlap,
    })
}

/// Resolve the ball against the paddle and hand it some of the paddle's motion.
///
/// Returns the overlap rectangle when they touch.
pub fn ball_paddle_collision(ball: &mut Ball, paddle: &Paddle, friction: f32) -> Option<Rect> {
    let overlap = intersects(ball.bounds(), paddle.rect())?;

    // Contact below the ball center: hit from above or from a side
    if overlap.y > ball.pos.y {
        ball.vel.y = -ball.vel.y;

        if overlap.w < overlap.h {
            ball.pos.x -= signum(ball.vel.x) as f32 * overlap.w;
            // A paddle moving the same way carries the ball along
            if signum(ball.vel.x) != signum(paddle.vel.x) {
                ball.vel.x = -ball.vel.x;
            }
        }

        ball.pos.y -= overlap.h;
    }

    ball.vel.x += paddle.vel.x * friction;

    Some(overlap)
}
