//! Display list generation

use glam::Vec2;

use crate::consts::TEXT_HEIGHT;
use crate::session::{PromptKind, Session};
use crate::sim::{Ball, Board, Color, Paddle, Rect};

/// A single drawing primitive, in screen pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole screen
    Clear(Color),
    FillRect { rect: Rect, color: Color },
    /// One pixel outline
    StrokeRect { rect: Rect, color: Color },
    FillCircle { center: Vec2, radius: f32, color: Color },
    Line { from: Vec2, to: Vec2, color: Color },
    /// Left-aligned text; `pos` is the top-left corner
    Text { pos: Vec2, text: String, color: Color },
}

/// Brick colors by remaining hit points (1, 2, 3+)
const BRICK_COLORS: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

/// Fill color for a brick with `hp` hit points left
pub fn brick_color(hp: u8) -> Color {
    let index = (hp.max(1) as usize - 1).min(BRICK_COLORS.len() - 1);
    BRICK_COLORS[index]
}

/// Build this frame's display list
pub fn build_scene(session: &Session) -> Vec<DrawCmd> {
    let mut cmds = vec![DrawCmd::Clear(Color::BLACK)];
    let screen = session.tuning().screen();

    if let Some(kind) = session.prompt() {
        draw_prompt(&mut cmds, kind, session.state().score.total(), screen);
        return cmds;
    }

    let state = session.state();
    draw_board(&mut cmds, &state.board);
    draw_ball(&mut cmds, &state.ball);
    draw_paddle(&mut cmds, &state.paddle, state.ball.radius, session.tuning().sight_len);
    draw_hud(&mut cmds, state.score.total(), state.ball.lives, screen);
    cmds
}

fn draw_board(cmds: &mut Vec<DrawCmd>, board: &Board) {
    for (row, col, hp) in board.bricks() {
        let rect = board.cell_rect(row, col);
        cmds.push(DrawCmd::FillRect {
            rect,
            color: brick_color(hp),
        });
        cmds.push(DrawCmd::StrokeRect {
            rect,
            color: Color::BLACK,
        });
    }
}

fn draw_ball(cmds: &mut Vec<DrawCmd>, ball: &Ball) {
    cmds.push(DrawCmd::FillCircle {
        center: ball.pos,
        radius: ball.radius,
        color: ball.color,
    });
}

fn draw_paddle(cmds: &mut Vec<DrawCmd>, paddle: &Paddle, ball_radius: f32, sight_len: f32) {
    let rect = paddle.rect();
    cmds.push(DrawCmd::FillRect {
        rect,
        color: paddle.color,
    });
    cmds.push(DrawCmd::StrokeRect {
        rect,
        color: Color::WHITE,
    });

    if paddle.locked {
        for (i, line) in [
            "Use Left/Right Arrow Keys to aim.",
            "Press SPACEBAR to launch ball.",
        ]
        .into_iter()
        .enumerate()
        {
            cmds.push(DrawCmd::Text {
                pos: Vec2::new(10.0, 20.0 + i as f32 * TEXT_HEIGHT),
                text: line.to_string(),
                color: Color::WHITE,
            });
        }

        let from = Vec2::new(paddle.center_x(), paddle.pos.y - ball_radius);
        cmds.push(DrawCmd::Line {
            from,
            to: from + paddle.launch_direction() * sight_len,
            color: Color::SIGHT,
        });
    }
}

fn draw_hud(cmds: &mut Vec<DrawCmd>, score: u64, lives: u32, screen: Vec2) {
    cmds.push(DrawCmd::Text {
        pos: Vec2::new(10.0, screen.y - TEXT_HEIGHT * 2.0),
        text: format!("Score: {score}"),
        color: Color::WHITE,
    });
    cmds.push(DrawCmd::Text {
        pos: Vec2::new(10.0, screen.y - TEXT_HEIGHT),
        text: format!("Lives: {lives}"),
        color: Color::WHITE,
    });
}

fn draw_prompt(cmds: &mut Vec<DrawCmd>, kind: PromptKind, score: u64, screen: Vec2) {
    let lines = [
        kind.message().to_string(),
        format!("Final Score: {score}"),
        "Press ENTER to play again".to_string(),
        "Press ESCAPE to quit".to_string(),
    ];
    let origin = Vec2::new(screen.x / 3.0, screen.y / 2.0 - 2.0 * TEXT_HEIGHT);
    for (i, text) in lines.into_iter().enumerate() {
        cmds.push(DrawCmd::Text {
            pos: origin + Vec2::new(0.0, i as f32 * TEXT_HEIGHT),
            text,
            color: Color::WHITE,
        });
    }
}
