use hecs::World;
use log::debug;

use crate::components::Ball;
use crate::config::Config;
use crate::resources::{Events, GameRng, Score};

/// Check if the ball left the field and award the point.
///
/// An exit past the left edge is a point for the computer, past the right
/// edge a point for the user. Either way the ball is recentered; the reset
/// never touches the score.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let field = &config.field;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x < 0.0 {
            score.increment_computer();
            events.computer_scored = true;
            debug!("computer scores, {}-{}", score.user, score.computer);

            ball.reset(field, config.ball_speed, rng);
        } else if ball.pos.x > field.width - field.ball_size {
            score.increment_user();
            events.user_scored = true;
            debug!("user scores, {}-{}", score.user, score.computer);

            ball.reset(field, config.ball_speed, rng);
        }
    }
}
