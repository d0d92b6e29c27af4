pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod runner;
pub mod session;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;
pub use runner::*;
pub use session::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Advance the simulation by one tick.
///
/// The order is fixed: queued inputs move the user paddle, the computer
/// paddle tracks the ball, the ball integrates, then collisions and
/// scoring are resolved against the integrated position.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input_queue: &mut InputQueue,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply queued key events to the user paddle
    apply_user_input(world, input_queue, config);

    // 2. Computer paddle tracks the ball
    track_ball(world, config);

    // 3. Integrate ball position
    move_ball(world);

    // 4. Collisions against the integrated position (paddles, then walls)
    check_collisions(world, config, events);

    // 5. Scoring when the ball leaves the field
    check_scoring(world, config, score, events, rng);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
