//! Drawing surface abstraction and the scene renderer

use crate::{Ball, Paddle};

/// Fill colors used by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Blue,
    Red,
}

impl Color {
    /// CSS color keyword
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Red => "red",
        }
    }
}

/// Minimal 2D drawing capability the game needs from its host
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
}

/// Draws the scene; holds nothing between frames except the surface
pub struct Renderer<S: Surface> {
    surface: S,
    ball_color: Color,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S, ball_color: Color) -> Self {
        Self {
            surface,
            ball_color,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn clear_canvas(&mut self) {
        let (w, h) = (self.surface.width(), self.surface.height());
        self.surface.clear_rect(0.0, 0.0, w, h);
    }

    /// Clear, then ball, then left and right paddle
    pub fn render(&mut self, ball: &Ball, left: &Paddle, right: &Paddle) {
        self.clear_canvas();
        ball.draw(&mut self.surface, self.ball_color);
        left.draw(&mut self.surface);
        right.draw(&mut self.surface);
    }
}

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
}

/// Headless surface that records draw calls instead of rasterizing them
#[derive(Debug, Clone)]
pub struct CommandSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl CommandSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands issued since the most recent clear
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }
}

impl Surface for CommandSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::Clear { x, y, w, h });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }
}
