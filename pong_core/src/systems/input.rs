use hecs::World;

use crate::components::{Paddle, Side};
use crate::config::Config;
use crate::resources::{InputQueue, PaddleMove};

/// Drain queued key events and apply them to the user paddle.
///
/// Requests are applied in arrival order, additively; the sum is clamped
/// once, so out-of-range requests saturate instead of being rejected.
pub fn apply_user_input(world: &mut World, queue: &mut InputQueue, config: &Config) {
    let moves = queue.drain();
    if moves.is_empty() {
        return;
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::User {
            continue;
        }
        for mv in &moves {
            paddle.y += match mv {
                PaddleMove::Up => -config.user_paddle_step,
                PaddleMove::Down => config.user_paddle_step,
            };
        }
        paddle.y = config.field.clamp_paddle_y(paddle.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    fn setup() -> (World, InputQueue, Config) {
        (World::new(), InputQueue::new(), Config::new())
    }

    fn paddle_y(world: &World, side: Side) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap()
    }

    #[test]
    fn test_moves_apply_in_order_additively() {
        let (mut world, mut queue, config) = setup();
        create_paddle(&mut world, Side::User, 80.0);

        queue.push(PaddleMove::Up);
        queue.push(PaddleMove::Up);
        queue.push(PaddleMove::Down);

        apply_user_input(&mut world, &mut queue, &config);

        assert_eq!(paddle_y(&world, Side::User), 70.0, "80 - 10 - 10 + 10");
        assert!(queue.is_empty(), "queue is consumed by the tick");
    }

    #[test]
    fn test_clamps_at_top() {
        let (mut world, mut queue, config) = setup();
        create_paddle(&mut world, Side::User, 5.0);

        queue.push(PaddleMove::Up);
        queue.push(PaddleMove::Up);
        apply_user_input(&mut world, &mut queue, &config);

        assert_eq!(paddle_y(&world, Side::User), 0.0);
    }

    #[test]
    fn test_clamps_at_bottom() {
        let (mut world, mut queue, config) = setup();
        let max_y = config.field.height - config.field.paddle_height;
        create_paddle(&mut world, Side::User, max_y - 5.0);

        queue.push(PaddleMove::Down);
        queue.push(PaddleMove::Down);
        apply_user_input(&mut world, &mut queue, &config);

        assert_eq!(paddle_y(&world, Side::User), max_y);
    }

    #[test]
    fn test_computer_paddle_is_untouched() {
        let (mut world, mut queue, config) = setup();
        create_paddle(&mut world, Side::User, 80.0);
        create_paddle(&mut world, Side::Computer, 80.0);

        queue.push(PaddleMove::Down);
        apply_user_input(&mut world, &mut queue, &config);

        assert_eq!(paddle_y(&world, Side::Computer), 80.0);
    }

    #[test]
    fn test_empty_queue_is_a_no_op() {
        let (mut world, mut queue, config) = setup();
        create_paddle(&mut world, Side::User, 80.0);

        apply_user_input(&mut world, &mut queue, &config);

        assert_eq!(paddle_y(&world, Side::User), 80.0);
    }
}
