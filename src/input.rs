//! Input events consumed by the simulation
//!
//! The platform layer translates raw keyboard events into [`InputEvent`]s and
//! queues them; the simulation drains the queue once per tick.

use std::collections::VecDeque;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Steer paddle left / aim left
    Left,
    /// Steer paddle right / aim right
    Right,
    /// Launch the ball
    Launch,
    /// Accept a prompt (play again)
    Confirm,
    /// Decline a prompt
    Cancel,
    /// Leave the game
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
}

/// Source of pending input events
pub trait InputSource {
    /// Next pending event, or `None` once drained
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// FIFO queue of input events
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl InputSource for EventQueue {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

impl<const N: usize> From<[InputEvent; N]> for EventQueue {
    fn from(events: [InputEvent; N]) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}
