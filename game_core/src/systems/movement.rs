use crate::{Ball, InputTracker, Paddle, Playfield};
use hecs::World;

/// Apply held keys to paddles; up is applied before down
pub fn move_paddles(world: &mut World, input: &InputTracker, playfield: &Playfield) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let command = input.command(paddle.side);
        if command.up {
            paddle.move_up();
        }
        if command.down {
            paddle.move_down(playfield);
        }
    }
}

/// Move ball by one velocity step
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.integrate();
    }
}
