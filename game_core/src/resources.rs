use glam::Vec2;

use crate::{Contacts, Params};

/// Playfield bounds, taken from the drawing surface and fixed for the run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(Params::PLAYFIELD_WIDTH, Params::PLAYFIELD_HEIGHT)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub left_paddle_hit: bool,
    pub right_paddle_hit: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.left_paddle_hit = false;
        self.right_paddle_hit = false;
    }

    pub fn record(&mut self, contacts: Contacts) {
        self.ball_hit_wall |= contacts.wall;
        self.left_paddle_hit |= contacts.left_paddle;
        self.right_paddle_hit |= contacts.right_paddle;
    }

    pub fn ball_hit_paddle(&self) -> bool {
        self.left_paddle_hit || self.right_paddle_hit
    }
}
