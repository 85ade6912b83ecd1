use glam::Vec2;
use thiserror::Error;

use crate::{Color, Params, Playfield, Side};

/// Rejected game configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("playfield must have positive finite size, got {width}x{height}")]
    InvalidPlayfield { width: f32, height: f32 },
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub left_paddle_x: f32,
    pub right_paddle_inset: f32,
    pub left_color: Color,
    pub right_color: Color,
    pub ball_color: Color,
    pub ball_radius: f32,
    pub ball_vel_initial: Vec2,
    pub ball_speed_increment: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            left_paddle_x: Params::LEFT_PADDLE_X,
            right_paddle_inset: Params::RIGHT_PADDLE_INSET,
            left_color: Params::LEFT_COLOR,
            right_color: Params::RIGHT_COLOR,
            ball_color: Params::BALL_COLOR,
            ball_radius: Params::BALL_RADIUS,
            ball_vel_initial: Vec2::new(Params::BALL_DX_INITIAL, Params::BALL_DY_INITIAL),
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle; the right one mirrors the left against the far edge
    pub fn paddle_x(&self, side: Side, playfield: &Playfield) -> f32 {
        match side {
            Side::Left => self.left_paddle_x,
            Side::Right => playfield.width - self.right_paddle_inset,
        }
    }

    /// Top edge that vertically centers a paddle
    pub fn paddle_start_y(&self, playfield: &Playfield) -> f32 {
        playfield.height / 2.0 - self.paddle_height / 2.0
    }

    pub fn paddle_color(&self, side: Side) -> Color {
        match side {
            Side::Left => self.left_color,
            Side::Right => self.right_color,
        }
    }

    pub fn ball_start(&self, playfield: &Playfield) -> Vec2 {
        playfield.center()
    }

    /// Only sizes are checked; a cramped playfield still runs, paddles pin
    /// to the clamps and paddle zones may overlap
    pub fn validate(&self, playfield: &Playfield) -> Result<(), ConfigError> {
        if !playfield.is_valid() {
            return Err(ConfigError::InvalidPlayfield {
                width: playfield.width,
                height: playfield.height,
            });
        }

        let positive = [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed_increment", self.ball_speed_increment),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        Ok(())
    }
}
