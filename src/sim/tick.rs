//! Fixed timestep simulation tick
//!
//! One call to [`tick`] is one frame: react to input, move, collide, and
//! report what the session should do next.

use serde::{Deserialize, Serialize};

use super::collision::{ball_board_collision, ball_paddle_collision};
use super::kinematics::{integrate_ball, integrate_paddle};
use super::state::{Ball, GameState, Paddle};
use crate::input::{InputEvent, InputSource, Key};
use crate::tuning::Tuning;

/// Outcome of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameState {
    /// Keep playing
    Normal,
    /// Ball lost, lives remain: serve again
    Dead,
    /// Ball lost with no lives left
    GameOver,
    /// Player asked to leave
    Quit,
    /// Board cleared
    NextLevel,
}

/// Drain every pending input event.
///
/// Returns `false` as soon as the player asks to quit; the remaining events
/// stay queued.
pub fn process_input(
    ball: &mut Ball,
    paddle: &mut Paddle,
    input: &mut impl InputSource,
    tuning: &Tuning,
) -> bool {
    while let Some(event) = input.poll_event() {
        match event {
            InputEvent::KeyDown(Key::Left) => {
                if paddle.locked {
                    paddle.aim_left(tuning.aim_step);
                } else {
                    paddle.vel.x = -tuning.paddle_speed;
                }
            }
            InputEvent::KeyDown(Key::Right) => {
                if paddle.locked {
                    paddle.aim_right(tuning.aim_step);
                } else {
                    paddle.vel.x = tuning.paddle_speed;
                }
            }
            InputEvent::KeyDown(Key::Launch) => paddle.launch(ball, tuning.ball_speed),
            InputEvent::KeyDown(Key::Quit | Key::Cancel) => return false,
            InputEvent::KeyUp(Key::Left | Key::Right) => paddle.vel.x = 0.0,
            _ => {}
        }
    }
    true
}

/// Advance the game by one fixed timestep
pub fn tick(state: &mut GameState, input: &mut impl InputSource, tuning: &Tuning) -> FrameState {
    if !state.ball.alive {
        return if state.ball.lives > 0 {
            FrameState::Dead
        } else {
            FrameState::GameOver
        };
    }

    if state.board.is_empty() {
        return FrameState::NextLevel;
    }

    if !process_input(&mut state.ball, &mut state.paddle, input, tuning) {
        return FrameState::Quit;
    }

    // Ball and paddle stay frozen until launch
    if !state.paddle.locked {
        let dt = tuning.sim_dt();
        integrate_ball(&mut state.ball, tuning.screen(), dt);
        integrate_paddle(&mut state.paddle, tuning.screen().x, dt);
    }

    ball_board_collision(
        &mut state.ball,
        &mut state.board,
        &mut state.score,
        tuning.brick_score,
    );
    ball_paddle_collision(&mut state.ball, &state.paddle, tuning.paddle_friction);

    FrameState::Normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::EventQueue;
    use glam::Vec2;

    fn playing_state(tuning: &Tuning) -> GameState {
        let mut state = GameState::new(tuning);
        // A lone brick well away from the ball's path
        state.board.set(0, 0, 1);
        state
    }

    #[test]
    fn test_locked_ball_stays_put() {
        let tuning = Tuning::default();
        let mut state = playing_state(&tuning);
        let ball_pos = state.ball.pos;

        let mut input = EventQueue::new();
        for _ in 0..10 {
            assert_eq!(tick(&mut state, &mut input, &tuning), FrameState::Normal);
        }
        assert_eq!(state.ball.pos, ball_pos);
        assert!(state.paddle.locked);
    }

    #[test]
    fn test_launch_then_move() {
        let tuning = Tuning::default();
        let mut state = playing_state(&tuning);
        let start_y = state.ball.pos.y;

        let mut input = EventQueue::from([InputEvent::KeyDown(Key::Launch)]);
        assert_eq!(tick(&mut state, &mut input, &tuning), FrameState::Normal);
        assert!(!state.paddle.locked);
        // Launched and integrated in the same frame: 600 px/s * 0.01 s upward
        assert!((state.ball.pos.y - (start_y - 6.0)).abs() < 1e-3);
    }

    #[test]
    fn test_aiming_while_locked() {
        let tuning = Tuning::default();
        let mut state = playing_state(&tuning);
        let angle = state.paddle.launch_angle;

        let mut input = EventQueue::from([
            InputEvent::KeyDown(Key::Left),
            InputEvent::KeyDown(Key::Left),
            InputEvent::KeyDown(Key::Right),
        ]);
        tick(&mut state, &mut input, &tuning);
        assert!((state.paddle.launch_angle - (angle + tuning.aim_step)).abs() < 1e-6);
        assert_eq!(state.paddle.vel, Vec2::ZERO);
    }

    #[test]
    fn test_drains_all_events() {
        let tuning = Tuning::default();
        let mut state = playing_state(&tuning);
        state.paddle.locked = false;

        // A quick tap between two frames still ends with the paddle at rest
        let mut input = EventQueue::from([
            InputEvent::KeyDown(Key::Right),
            InputEvent::KeyUp(Key::Right),
            InputEvent::KeyDown(Key::Left),
        ]);
        tick(&mut state, &mut input, &tuning);
        assert!(input.is_empty());
        assert_eq!(state.paddle.vel.x, -tuning.paddle_speed);
    }

    #[test]
    fn test_quit_stops_the_frame() {
        let tuning = Tuning::default();
        let mut state = playing_state(&tuning);
        state.paddle.locked = false;
        state.ball.vel = Vec2::new(0.0, -600.0);
        let ball_pos = state.ball.pos;

        let mut input = EventQueue::from([
            InputEvent::KeyDown(Key::Quit),
            InputEvent::KeyDown(Key::Right),
        ]);
        assert_eq!(tick(&mut state, &mut input, &tuning), FrameState::Quit);
        assert_eq!(state.ball.pos, ball_pos);
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn test_dead_and_game_over() {
        let tuning = Tuning::default();
        let mut state = playing_state(&tuning);
        let mut input = EventQueue::new();

        state.ball.kill();
        assert_eq!(tick(&mut state, &mut input, &tuning), FrameState::Dead);

        state.ball.lives = 0;
        assert_eq!(tick(&mut state, &mut input, &tuning), FrameState::GameOver);
    }

    #[test]
    fn test_death_wins_over_empty_board() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.ball.kill();
        let mut input = EventQueue::new();
        assert_eq!(tick(&mut state, &mut input, &tuning), FrameState::Dead);
    }

    #[test]
    fn test_empty_board_is_next_level() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        let mut input = EventQueue::from([InputEvent::KeyDown(Key::Launch)]);
        assert_eq!(tick(&mut state, &mut input, &tuning), FrameState::NextLevel);
        // Input is not consumed on a transition frame
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn test_falling_ball_costs_a_life() {
        let tuning = Tuning::default();
        let mut state = playing_state(&tuning);
        state.paddle.locked = false;
        state.ball.pos = Vec2::new(10.0, 767.0);
        state.ball.vel = Vec2::new(0.0, 600.0);

        let mut input = EventQueue::new();
        assert_eq!(tick(&mut state, &mut input, &tuning), FrameState::Normal);
        assert!(!state.ball.alive);
        assert_eq!(state.ball.lives, tuning.lives - 1);
        assert_eq!(tick(&mut state, &mut input, &tuning), FrameState::Dead);
        assert_eq!(state.ball.lives, tuning.lives - 1);
    }

    #[test]
    fn test_clearing_last_brick() {
        let tuning = Tuning::default();
        let mut state = GameState::new(&tuning);
        state.board.set(5, 5, 1);
        state.paddle.locked = false;
        state.ball.pos = Vec2::new(264.0, 156.0);
        state.ball.vel = Vec2::new(0.0, -600.0);

        let mut input = EventQueue::new();
        assert_eq!(tick(&mut state, &mut input, &tuning), FrameState::Normal);
        assert_eq!(state.score.total(), tuning.brick_score);
        assert!(state.ball.vel.y > 0.0);
        assert_eq!(tick(&mut state, &mut input, &tuning), FrameState::NextLevel);
    }
}
