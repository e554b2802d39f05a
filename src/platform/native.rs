//! Native window built on eframe/egui
//!
//! The UI thread runs at most one simulation tick per update, paced by the
//! wall clock. Simulated time per tick is fixed, so a slow frame slows the
//! game down rather than making it take a bigger step.

use std::time::{Duration, Instant};

use egui::{Align2, Color32, FontId, Painter, Pos2, Stroke};

use crate::input::{EventQueue, InputEvent, Key};
use crate::renderer::{DrawCmd, build_scene};
use crate::session::Session;
use crate::sim::{Color, Rect};
use crate::tuning::Tuning;

/// Map a physical key to a game key
pub fn map_key(key: egui::Key) -> Option<Key> {
    match key {
        egui::Key::ArrowLeft => Some(Key::Left),
        egui::Key::ArrowRight => Some(Key::Right),
        egui::Key::Space => Some(Key::Launch),
        egui::Key::Enter => Some(Key::Confirm),
        egui::Key::Escape => Some(Key::Cancel),
        egui::Key::Q => Some(Key::Quit),
        _ => None,
    }
}

/// The game window
pub struct BreakoutApp {
    session: Session,
    events: EventQueue,
    tick_interval: Duration,
    next_tick: Instant,
}

impl BreakoutApp {
    pub fn new(tuning: Tuning) -> Self {
        let tick_interval = Duration::from_micros(tuning.tick_micros);
        Self {
            session: Session::new(tuning),
            events: EventQueue::new(),
            tick_interval,
            next_tick: Instant::now(),
        }
    }

    /// Queue this frame's key presses and releases
    fn collect_input(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::Key { key, pressed, .. } = event {
                    if let Some(key) = map_key(*key) {
                        self.events.push(if *pressed {
                            InputEvent::KeyDown(key)
                        } else {
                            InputEvent::KeyUp(key)
                        });
                    }
                }
            }
        });
    }

    /// Run one tick if it is due; returns the time until the next one
    fn advance(&mut self) -> Duration {
        let now = Instant::now();
        if now >= self.next_tick {
            self.session.step(&mut self.events);
            self.next_tick = now + self.tick_interval;
        }
        self.next_tick.saturating_duration_since(Instant::now())
    }
}

impl eframe::App for BreakoutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.collect_input(ctx);
        let wait = self.advance();

        if !self.session.is_running() {
            log::info!("Closing window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let painter = ui.painter();
                let offset = ui.max_rect().min.to_vec2();
                for cmd in build_scene(&self.session) {
                    paint(painter, offset, &cmd);
                }
            });

        ctx.request_repaint_after(wait);
    }
}

fn to_color32(color: Color) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

fn to_pos(offset: egui::Vec2, p: glam::Vec2) -> Pos2 {
    Pos2::new(p.x, p.y) + offset
}

fn to_rect(offset: egui::Vec2, rect: &Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        Pos2::new(rect.x, rect.y) + offset,
        egui::vec2(rect.w, rect.h),
    )
}

/// Replay one display list entry
fn paint(painter: &Painter, offset: egui::Vec2, cmd: &DrawCmd) {
    match cmd {
        DrawCmd::Clear(color) => {
            painter.rect_filled(painter.clip_rect(), 0.0, to_color32(*color));
        }
        DrawCmd::FillRect { rect, color } => {
            painter.rect_filled(to_rect(offset, rect), 0.0, to_color32(*color));
        }
        DrawCmd::StrokeRect { rect, color } => {
            painter.rect_stroke(
                to_rect(offset, rect),
                0.0,
                Stroke::new(1.0, to_color32(*color)),
            );
        }
        DrawCmd::FillCircle {
            center,
            radius,
            color,
        } => {
            painter.circle_filled(to_pos(offset, *center), *radius, to_color32(*color));
        }
        DrawCmd::Line { from, to, color } => {
            painter.line_segment(
                [to_pos(offset, *from), to_pos(offset, *to)],
                Stroke::new(1.0, to_color32(*color)),
            );
        }
        DrawCmd::Text { pos, text, color } => {
            painter.text(
                to_pos(offset, *pos),
                Align2::LEFT_TOP,
                text,
                FontId::monospace(crate::consts::TEXT_HEIGHT),
                to_color32(*color),
            );
        }
    }
}

/// Open the game window and block until it closes
pub fn run(tuning: Tuning) -> anyhow::Result<()> {
    let size = [tuning.screen_width as f32, tuning.screen_height as f32];
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Brick")
            .with_inner_size(size)
            .with_resizable(false),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Brick",
        options,
        Box::new(|_cc| Ok(Box::new(BreakoutApp::new(tuning)))),
    )
    .map_err(|err| anyhow::anyhow!("window error: {err}"))
}
