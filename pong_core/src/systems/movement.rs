use hecs::World;

use crate::components::Ball;

/// Advance the ball by one tick of travel.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
