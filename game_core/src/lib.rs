pub mod components;
pub mod config;
pub mod driver;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use driver::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use simulation::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Advance the simulation by one tick
pub fn step(world: &mut World, input: &InputTracker, playfield: &Playfield, events: &mut Events) {
    // Clear events at start of frame
    events.clear();

    // 1. Move paddles from held keys
    move_paddles(world, input, playfield);

    // 2. Move ball
    move_ball(world);

    // 3. Reflect off walls and paddles
    check_collisions(world, playfield, events);
}

/// Helper to create a vertically centered paddle entity
pub fn create_paddle(
    world: &mut World,
    config: &Config,
    playfield: &Playfield,
    side: Side,
) -> hecs::Entity {
    let paddle = Paddle::new(
        side,
        config.paddle_x(side, playfield),
        config.paddle_start_y(playfield),
        config.paddle_width,
        config.paddle_height,
        config.paddle_speed,
        config.paddle_color(side),
    );
    world.spawn((paddle,))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, config: &Config) -> hecs::Entity {
    world.spawn((Ball::new(
        pos,
        vel,
        config.ball_radius,
        config.ball_speed_increment,
    ),))
}
