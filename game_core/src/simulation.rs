//! Simulation context owning every entity of a match

use glam::Vec2;
use hecs::{Entity, World};
use tracing::info;

use crate::systems::{check_collisions, move_ball, move_paddles};
use crate::{
    create_ball, create_paddle, step, Ball, Config, ConfigError, Events, InputTracker, Paddle,
    Playfield, Side,
};

pub struct Simulation {
    world: World,
    ball: Entity,
    left: Entity,
    right: Entity,
    input: InputTracker,
    playfield: Playfield,
    config: Config,
    events: Events,
}

/// Copy of everything the renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
}

impl Simulation {
    /// Ball at the center with the initial velocity, paddles vertically centered
    pub fn new(config: Config, playfield: Playfield) -> Result<Self, ConfigError> {
        config.validate(&playfield)?;

        let mut world = World::new();
        let left = create_paddle(&mut world, &config, &playfield, Side::Left);
        let right = create_paddle(&mut world, &config, &playfield, Side::Right);
        let ball = create_ball(
            &mut world,
            config.ball_start(&playfield),
            config.ball_vel_initial,
            &config,
        );

        info!(
            width = playfield.width,
            height = playfield.height,
            "simulation created"
        );

        Ok(Self {
            world,
            ball,
            left,
            right,
            input: InputTracker::new(),
            playfield,
            config,
            events: Events::new(),
        })
    }

    pub fn key_down(&mut self, key: &str) {
        self.input.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.input.key_up(key);
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn update_paddles(&mut self) {
        move_paddles(&mut self.world, &self.input, &self.playfield);
    }

    pub fn update_ball(&mut self) {
        self.events.clear();
        move_ball(&mut self.world);
        check_collisions(&mut self.world, &self.playfield, &mut self.events);
    }

    /// Paddles first, then the ball against the moved paddles
    pub fn update(&mut self) {
        step(
            &mut self.world,
            &self.input,
            &self.playfield,
            &mut self.events,
        );
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        self.world.get::<&Paddle>(entity).ok().map(|paddle| *paddle)
    }

    pub fn left_paddle(&self) -> Option<Paddle> {
        self.paddle(Side::Left)
    }

    pub fn right_paddle(&self) -> Option<Paddle> {
        self.paddle(Side::Right)
    }

    pub fn scene(&self) -> Option<Scene> {
        Some(Scene {
            ball: self.ball()?,
            left: self.left_paddle()?,
            right: self.right_paddle()?,
        })
    }

    /// Contacts from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// Place the ball, e.g. to set up a specific contact
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Place a paddle, pinned like a move would be. On a playfield shorter
    /// than the paddle the top clamp wins.
    pub fn set_paddle_y(&mut self, side: Side, y: f32) {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        let max_y = self.playfield.height - self.config.paddle_height;
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
            paddle.y = y.min(max_y).max(0.0);
        }
    }
}
