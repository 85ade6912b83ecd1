use glam::Vec2;

use crate::{Color, Playfield, Surface};

/// Which side of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed after creation
    pub y: f32, // Top edge, kept in [0, playfield height - height]
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub color: Color,
}

impl Paddle {
    pub fn new(
        side: Side,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        speed: f32,
        color: Color,
    ) -> Self {
        Self {
            side,
            x,
            y,
            width,
            height,
            speed,
            color,
        }
    }

    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom_edge(&self) -> f32 {
        self.y + self.height
    }

    /// Inclusive test of a y coordinate against the paddle's vertical span
    pub fn spans_y(&self, y: f32) -> bool {
        y >= self.y && y <= self.bottom_edge()
    }

    pub fn move_up(&mut self) {
        self.y -= self.speed;
        if self.y < 0.0 {
            self.y = 0.0;
        }
    }

    pub fn move_down(&mut self, playfield: &Playfield) {
        self.y += self.speed;
        if self.y + self.height > playfield.height {
            self.y = playfield.height - self.height;
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.fill_rect(self.x, self.y, self.width, self.height, self.color);
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub speed_increment: f32,
}

/// Contacts resolved during a single ball update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub wall: bool,
    pub left_paddle: bool,
    pub right_paddle: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, speed_increment: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            speed_increment,
        }
    }

    /// One Euler step; a tick is the unit of time
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    pub fn touches_wall(&self, playfield: &Playfield) -> bool {
        self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= playfield.height
    }

    /// Left edge at or past the paddle's right edge, center within its span
    pub fn touches_left_paddle(&self, paddle: &Paddle) -> bool {
        self.pos.x - self.radius <= paddle.right_edge() && paddle.spans_y(self.pos.y)
    }

    /// Right edge at or past the paddle's left edge, center within its span
    pub fn touches_right_paddle(&self, paddle: &Paddle) -> bool {
        self.pos.x + self.radius >= paddle.x && paddle.spans_y(self.pos.y)
    }

    /// Reflect off walls and paddles without correcting position.
    ///
    /// Every check fires on each call while its condition holds, so a ball
    /// that stays inside a paddle zone is reflected (and sped up) again on the
    /// next tick. Both paddle checks run independently.
    pub fn resolve_collisions(
        &mut self,
        left: &Paddle,
        right: &Paddle,
        playfield: &Playfield,
    ) -> Contacts {
        let mut contacts = Contacts::default();

        if self.touches_wall(playfield) {
            self.vel.y = -self.vel.y;
            contacts.wall = true;
        }

        if self.touches_left_paddle(left) {
            self.vel.x = -self.vel.x + self.speed_increment;
            contacts.left_paddle = true;
        }

        if self.touches_right_paddle(right) {
            self.vel.x = -self.vel.x - self.speed_increment;
            contacts.right_paddle = true;
        }

        contacts
    }

    pub fn update(&mut self, left: &Paddle, right: &Paddle, playfield: &Playfield) -> Contacts {
        self.integrate();
        self.resolve_collisions(left, right, playfield)
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, color: Color) {
        surface.fill_circle(self.pos.x, self.pos.y, self.radius, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left_paddle(y: f32) -> Paddle {
        Paddle::new(Side::Left, 20.0, y, 10.0, 100.0, 5.0, Color::Blue)
    }

    fn right_paddle(y: f32) -> Paddle {
        Paddle::new(Side::Right, 770.0, y, 10.0, 100.0, 5.0, Color::Red)
    }

    #[test]
    fn test_move_up_clamps_at_top() {
        let mut paddle = left_paddle(3.0);
        paddle.move_up();
        assert_eq!(paddle.y, 0.0);
        paddle.move_up();
        assert_eq!(paddle.y, 0.0, "Paddle should stay at the top edge");
    }

    #[test]
    fn test_move_down_clamps_at_bottom() {
        let playfield = Playfield::new(800.0, 600.0);
        let mut paddle = left_paddle(497.0);
        paddle.move_down(&playfield);
        assert_eq!(paddle.y, 500.0);
        paddle.move_down(&playfield);
        assert_eq!(paddle.y, 500.0, "Paddle should stay at the bottom edge");
    }

    #[test]
    fn test_move_by_speed_inside_bounds() {
        let playfield = Playfield::new(800.0, 600.0);
        let mut paddle = left_paddle(250.0);
        paddle.move_up();
        assert_eq!(paddle.y, 245.0);
        paddle.move_down(&playfield);
        paddle.move_down(&playfield);
        assert_eq!(paddle.y, 255.0);
        assert_eq!(paddle.x, 20.0, "Paddles never move horizontally");
    }

    #[test]
    fn test_spans_y_is_inclusive() {
        let paddle = left_paddle(200.0);
        assert!(paddle.spans_y(200.0));
        assert!(paddle.spans_y(300.0));
        assert!(!paddle.spans_y(199.9));
        assert!(!paddle.spans_y(300.1));
    }

    #[test]
    fn test_wall_flips_dy_without_moving_ball_back() {
        let playfield = Playfield::new(800.0, 600.0);
        let mut ball = Ball::new(Vec2::new(400.0, 595.0), Vec2::new(2.0, 2.0), 10.0, 0.5);
        let contacts = ball.resolve_collisions(&left_paddle(0.0), &right_paddle(0.0), &playfield);
        assert!(contacts.wall);
        assert_eq!(ball.vel, Vec2::new(2.0, -2.0));
        assert_eq!(ball.pos.y, 595.0, "No positional correction on reflection");
    }

    #[test]
    fn test_left_paddle_reflects_and_speeds_up() {
        let playfield = Playfield::new(800.0, 600.0);
        let mut ball = Ball::new(Vec2::new(29.0, 250.0), Vec2::new(-3.0, 1.0), 10.0, 0.5);
        let contacts = ball.update(&left_paddle(200.0), &right_paddle(0.0), &playfield);
        assert!(contacts.left_paddle);
        assert!(!contacts.right_paddle);
        assert_eq!(ball.vel.x, 3.5);
    }

    #[test]
    fn test_right_paddle_reflects_and_speeds_up() {
        let playfield = Playfield::new(800.0, 600.0);
        let mut ball = Ball::new(Vec2::new(758.0, 250.0), Vec2::new(3.0, 1.0), 10.0, 0.5);
        let contacts = ball.update(&left_paddle(0.0), &right_paddle(200.0), &playfield);
        assert!(contacts.right_paddle);
        assert_eq!(ball.vel.x, -3.5);
    }

    #[test]
    fn test_paddle_miss_leaves_velocity_alone() {
        let playfield = Playfield::new(800.0, 600.0);
        let mut ball = Ball::new(Vec2::new(25.0, 450.0), Vec2::new(-3.0, 0.0), 10.0, 0.5);
        let contacts = ball.update(&left_paddle(200.0), &right_paddle(200.0), &playfield);
        assert_eq!(contacts, Contacts::default());
        assert_eq!(ball.vel, Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn test_both_paddles_can_fire_in_one_update() {
        // Degenerate narrow field: the ball overlaps both paddle zones
        let playfield = Playfield::new(60.0, 600.0);
        let left = left_paddle(200.0);
        let right = Paddle::new(Side::Right, 30.0, 200.0, 10.0, 100.0, 5.0, Color::Red);
        let mut ball = Ball::new(Vec2::new(30.0, 250.0), Vec2::new(2.0, 0.0), 10.0, 0.5);

        let contacts = ball.resolve_collisions(&left, &right, &playfield);

        assert!(contacts.left_paddle && contacts.right_paddle);
        // dx = -2 + 0.5 = -1.5, then dx = 1.5 - 0.5 = 1.0
        assert_eq!(ball.vel.x, 1.0);
    }
}
