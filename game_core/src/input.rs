//! Keyboard state tracking
//!
//! Key events arrive independently of the frame loop, so the tracker only
//! records which keys are held; the simulation samples it once per tick.

use std::collections::HashSet;

use crate::Side;

pub const KEY_LEFT_UP: &str = "w";
pub const KEY_LEFT_DOWN: &str = "s";
pub const KEY_RIGHT_UP: &str = "ArrowUp";
pub const KEY_RIGHT_DOWN: &str = "ArrowDown";

/// Set of currently held key identifiers
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    pressed: HashSet<String>,
}

/// Movement requested for one paddle this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleCommand {
    pub up: bool,
    pub down: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent: holding a key that is already held changes nothing
    pub fn key_down(&mut self, key: &str) {
        if !self.pressed.contains(key) {
            self.pressed.insert(key.to_owned());
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.pressed.remove(key);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.pressed.contains(key)
    }

    pub fn len(&self) -> usize {
        self.pressed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }

    pub fn command(&self, side: Side) -> PaddleCommand {
        let (up, down) = match side {
            Side::Left => (KEY_LEFT_UP, KEY_LEFT_DOWN),
            Side::Right => (KEY_RIGHT_UP, KEY_RIGHT_DOWN),
        };
        PaddleCommand {
            up: self.is_pressed(up),
            down: self.is_pressed(down),
        }
    }
}
