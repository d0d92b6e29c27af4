use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;

/// Bang-bang tracking for the computer paddle.
///
/// Steps a fixed amount toward the ball's current vertical position every
/// tick. No prediction and no deadband, so the paddle overshoots and
/// oscillates when it is level with the ball.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.pos.y)
    };
    let ball_y = match ball_y {
        Some(y) => y,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Computer {
            continue;
        }
        let center = paddle.y + config.field.paddle_height / 2.0;
        if center < ball_y {
            paddle.y += config.ai_paddle_step;
        } else {
            paddle.y -= config.ai_paddle_step;
        }
        paddle.y = config.field.clamp_paddle_y(paddle.y);
    }
}
