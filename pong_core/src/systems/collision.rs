use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Events;

/// Check ball collisions against the paddles and the walls.
///
/// Runs on the already-integrated ball position, in a fixed order: user
/// paddle, computer paddle, then the horizontal walls. A paddle hit flips
/// only the horizontal velocity and leaves the ball where it is, so the
/// ball may overlap the paddle for a tick and flip again on the next one.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let field = &config.field;

    let mut paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();
    paddles.sort_by_key(|(side, _y)| match side {
        Side::User => 0u8,
        Side::Computer => 1u8,
    });

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for (side, paddle_y) in &paddles {
            let spans_overlap = ball.pos.y + field.ball_size > *paddle_y
                && ball.pos.y < *paddle_y + field.paddle_height;
            let in_reach = match side {
                Side::User => ball.pos.x < field.paddle_width,
                Side::Computer => {
                    ball.pos.x + field.ball_size > field.width - field.paddle_width
                }
            };
            if in_reach && spans_overlap {
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
            }
        }

        if ball.pos.y < 0.0 || ball.pos.y > field.height - field.ball_size {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}
