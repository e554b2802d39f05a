//! Run-level driver: levels, lives, game over and victory prompts
//!
//! [`Session::step`] is called once per tick. It turns the [`FrameState`]
//! reported by the previous frame into the next action with an explicit
//! match. Prompts are cooperative: while one is showing, steps only look
//! for Confirm or Cancel.

use crate::input::{InputEvent, InputSource, Key};
use crate::sim::{FrameState, GameState, tick};
use crate::tuning::Tuning;

/// Modal screens waiting for a play-again decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Out of lives
    GameOver,
    /// Every level cleared
    Victory,
}

impl PromptKind {
    pub fn message(&self) -> &'static str {
        match self {
            PromptKind::GameOver => "GAME OVER",
            PromptKind::Victory => "YOU WIN!",
        }
    }
}

/// Where the session is between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Playing; holds the last frame's result
    Running(FrameState),
    /// Waiting for the player to accept or decline another run
    Prompt(PromptKind),
    /// Finished; the platform should close
    Exited,
}

/// A game session
#[derive(Debug, Clone)]
pub struct Session {
    tuning: Tuning,
    state: GameState,
    phase: Phase,
}

impl Session {
    /// Start on level 1 with full lives
    pub fn new(tuning: Tuning) -> Self {
        let mut session = Self {
            state: GameState::new(&tuning),
            tuning,
            phase: Phase::Running(FrameState::Normal),
        };
        if !session.load_current_level() {
            log::warn!(
                "Level 1 not found in {}, starting with an empty board",
                session.tuning.level_dir.display()
            );
        }
        session
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Exited
    }

    /// Active prompt, if any
    pub fn prompt(&self) -> Option<PromptKind> {
        match self.phase {
            Phase::Prompt(kind) => Some(kind),
            _ => None,
        }
    }

    /// Process one tick
    pub fn step(&mut self, input: &mut impl InputSource) {
        match self.phase {
            Phase::Exited => {}
            Phase::Prompt(kind) => self.answer_prompt(kind, input),
            Phase::Running(FrameState::Normal) => self.run_frame(input),
            Phase::Running(FrameState::Dead) => {
                log::info!("Ball lost, {} lives left", self.state.ball.lives);
                self.state.reset_entities(&self.tuning);
                self.run_frame(input);
            }
            Phase::Running(FrameState::NextLevel) => {
                self.state.level += 1;
                if self.load_current_level() {
                    log::info!("Starting level {}", self.state.level);
                    self.state.reset_entities(&self.tuning);
                    self.run_frame(input);
                } else {
                    log::info!(
                        "No level {}, run complete with score {}",
                        self.state.level,
                        self.state.score.total()
                    );
                    self.phase = Phase::Prompt(PromptKind::Victory);
                }
            }
            // Never stored by run_frame, handled the same way if set directly
            Phase::Running(FrameState::GameOver) => {
                self.phase = Phase::Prompt(PromptKind::GameOver);
            }
            Phase::Running(FrameState::Quit) => self.phase = Phase::Exited,
        }
    }

    /// Run one frame and record where it leaves the session
    fn run_frame(&mut self, input: &mut impl InputSource) {
        self.phase = match tick(&mut self.state, input, &self.tuning) {
            FrameState::GameOver => {
                log::info!("Game over with score {}", self.state.score.total());
                Phase::Prompt(PromptKind::GameOver)
            }
            FrameState::Quit => {
                log::info!("Quit requested");
                Phase::Exited
            }
            other => Phase::Running(other),
        };
    }

    /// Wait for Confirm (new run) or Cancel (exit); other keys are ignored
    fn answer_prompt(&mut self, kind: PromptKind, input: &mut impl InputSource) {
        while let Some(event) = input.poll_event() {
            match event {
                InputEvent::KeyDown(Key::Confirm) => {
                    log::info!("Playing again after {}", kind.message());
                    self.restart();
                    self.run_frame(input);
                    return;
                }
                InputEvent::KeyDown(Key::Cancel | Key::Quit) => {
                    self.phase = Phase::Exited;
                    return;
                }
                _ => {}
            }
        }
    }

    /// Full lives, zero score, level 1, ball served
    fn restart(&mut self) {
        self.state.restart(&self.tuning);
        if !self.load_current_level() {
            log::warn!("Level 1 missing on restart, keeping the current board");
        }
        self.state.reset_entities(&self.tuning);
    }

    fn load_current_level(&mut self) -> bool {
        match self
            .state
            .board
            .load_level_number(&self.tuning.level_dir, self.state.level)
        {
            Ok(()) => true,
            Err(err) => {
                log::debug!("Level {} unavailable: {err}", self.state.level);
                false
            }
        }
    }
}
