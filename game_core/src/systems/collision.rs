use crate::{Ball, Events, Paddle, Playfield, Side};
use hecs::World;
use tracing::debug;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, playfield: &Playfield, events: &mut Events) {
    // Copy paddles out so the ball can be borrowed mutably
    let mut left = None;
    let mut right = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Side::Left => left = Some(*paddle),
            Side::Right => right = Some(*paddle),
        }
    }

    let (left, right) = match (left, right) {
        (Some(left), Some(right)) => (left, right),
        _ => return, // Both paddles are needed
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let contacts = ball.resolve_collisions(&left, &right, playfield);

        if contacts.wall {
            debug!(y = ball.pos.y, dy = ball.vel.y, "ball hit wall");
        }
        if contacts.left_paddle {
            debug!(side = ?Side::Left, dx = ball.vel.x, "ball hit paddle");
        }
        if contacts.right_paddle {
            debug!(side = ?Side::Right, dx = ball.vel.x, "ball hit paddle");
        }

        events.record(contacts);
    }
}
