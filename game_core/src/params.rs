use crate::Color;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield used when no drawing surface supplies one
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 5.0; // units per move call
    pub const LEFT_PADDLE_X: f32 = 20.0;
    pub const RIGHT_PADDLE_INSET: f32 = 30.0; // right paddle x = width - inset
    pub const LEFT_COLOR: Color = Color::Blue;
    pub const RIGHT_COLOR: Color = Color::Red;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_DX_INITIAL: f32 = 2.0;
    pub const BALL_DY_INITIAL: f32 = 2.0;
    pub const BALL_SPEED_INCREMENT: f32 = 0.5; // added to |dx| on each paddle hit
    pub const BALL_COLOR: Color = Color::Black;
}
