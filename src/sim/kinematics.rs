//! Ball and paddle motion for one fixed timestep

use glam::Vec2;

use super::state::{Ball, Paddle};

/// Advance the ball and bounce it off the side and top walls.
///
/// The bottom edge is not a wall: crossing it costs a life.
pub fn integrate_ball(ball: &mut Ball, screen: Vec2, dt: f32) {
    ball.pos += ball.vel * dt;

    if ball.pos.x < 0.0 {
        ball.pos.x = 0.0;
        ball.vel.x = -ball.vel.x;
    } else if ball.pos.x + ball.radius > screen.x {
        ball.pos.x = screen.x - ball.radius;
        ball.vel.x = -ball.vel.x;
    }

    if ball.pos.y < 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = -ball.vel.y;
    } else if ball.pos.y > screen.y {
        ball.kill();
    }
}

/// Advance the paddle horizontally and keep it on screen
pub fn integrate_paddle(paddle: &mut Paddle, screen_width: f32, dt: f32) {
    paddle.pos.x += paddle.vel.x * dt;
    paddle.pos.x = paddle.pos.x.clamp(0.0, (screen_width - paddle.width).max(0.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SCREEN: Vec2 = Vec2::new(768.0, 768.0);
    const DT: f32 = 0.01;

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::new(8.0, 3);
        ball.pos = pos;
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_free_flight() {
        let mut ball = ball_at(Vec2::new(100.0, 100.0), Vec2::new(300.0, -200.0));
        integrate_ball(&mut ball, SCREEN, DT);
        assert!((ball.pos.x - 103.0).abs() < 1e-4);
        assert!((ball.pos.y - 98.0).abs() < 1e-4);
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut ball = ball_at(Vec2::new(2.0, 100.0), Vec2::new(-600.0, 0.0));
        integrate_ball(&mut ball, SCREEN, DT);
        assert_eq!(ball.pos.x, 0.0);
        assert_eq!(ball.vel.x, 600.0);
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut ball = ball_at(Vec2::new(758.0, 100.0), Vec2::new(600.0, 0.0));
        integrate_ball(&mut ball, SCREEN, DT);
        assert_eq!(ball.pos.x, 760.0);
        assert_eq!(ball.vel.x, -600.0);
    }

    #[test]
    fn test_ceiling_bounce() {
        let mut ball = ball_at(Vec2::new(100.0, 3.0), Vec2::new(0.0, -600.0));
        integrate_ball(&mut ball, SCREEN, DT);
        assert_eq!(ball.pos.y, 0.0);
        assert_eq!(ball.vel.y, 600.0);
    }

    #[test]
    fn test_floor_costs_one_life() {
        let mut ball = ball_at(Vec2::new(100.0, 765.0), Vec2::new(0.0, 600.0));
        integrate_ball(&mut ball, SCREEN, DT);
        assert!(!ball.alive);
        assert_eq!(ball.lives, 2);

        // Still below the floor on later steps: no further loss
        integrate_ball(&mut ball, SCREEN, DT);
        integrate_ball(&mut ball, SCREEN, DT);
        assert_eq!(ball.lives, 2);
    }

    #[test]
    fn test_paddle_moves_and_clamps() {
        let mut paddle = Paddle::new(76.0, 24.0);
        paddle.pos = Vec2::new(100.0, 720.0);
        paddle.vel = Vec2::new(-512.0, 0.0);

        integrate_paddle(&mut paddle, SCREEN.x, DT);
        assert!((paddle.pos.x - 94.88).abs() < 1e-3);
        assert_eq!(paddle.pos.y, 720.0);

        integrate_paddle(&mut paddle, SCREEN.x, 1.0);
        assert_eq!(paddle.pos.x, 0.0);

        paddle.vel.x = 512.0;
        integrate_paddle(&mut paddle, SCREEN.x, 10.0);
        assert_eq!(paddle.pos.x, 692.0);
        assert_eq!(paddle.vel.y, 0.0);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_on_screen(
            x in 0.0f32..692.0,
            vx in -2000.0f32..2000.0,
            steps in 1usize..200,
        ) {
            let mut paddle = Paddle::new(76.0, 24.0);
            paddle.pos = Vec2::new(x, 720.0);
            paddle.vel = Vec2::new(vx, 0.0);
            for _ in 0..steps {
                integrate_paddle(&mut paddle, SCREEN.x, DT);
                prop_assert!(paddle.pos.x >= 0.0 && paddle.pos.x <= 692.0);
                prop_assert_eq!(paddle.pos.y, 720.0);
            }
        }

        #[test]
        fn prop_ball_stays_in_bounds_while_alive(
            x in 0.0f32..760.0,
            y in 0.0f32..768.0,
            vx in -1500.0f32..1500.0,
            vy in -1500.0f32..1500.0,
            steps in 1usize..300,
        ) {
            let mut ball = ball_at(Vec2::new(x, y), Vec2::new(vx, vy));
            let lives = ball.lives;
            for _ in 0..steps {
                integrate_ball(&mut ball, SCREEN, DT);
                if ball.alive {
                    prop_assert!(ball.pos.x >= 0.0 && ball.pos.x <= 760.0);
                    prop_assert!(ball.pos.y >= 0.0);
                }
            }
            // At most one life lost, and only when the ball left the screen
            if ball.alive {
                prop_assert_eq!(ball.lives, lives);
            } else {
                prop_assert_eq!(ball.lives, lives - 1);
            }
        }
    }
}
