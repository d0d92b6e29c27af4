use glam::Vec2;

use crate::config::FieldGeometry;
use crate::resources::GameRng;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    User,     // left
    Computer, // right
}

/// Paddle component - `y` is the top edge, clamped to the field
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Ball component - `pos` is the top-left corner of the ball square
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Recenter the ball after a score.
    ///
    /// The horizontal direction reverses, so the next serve departs away
    /// from the edge the ball just left. The vertical direction is a coin
    /// flip at full speed.
    pub fn reset(&mut self, field: &FieldGeometry, speed: f32, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = field.ball_spawn();
        self.vel.x = -self.vel.x;
        self.vel.y = if rng.0.gen_bool(0.5) { speed } else { -speed };
    }
}
