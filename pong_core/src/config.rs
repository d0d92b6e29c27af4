use glam::Vec2;

use crate::params::Params;

/// Field bounds and the fixed sizes of the pieces on it.
///
/// Populated once when a session is created and never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct FieldGeometry {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_size: f32,
}

impl FieldGeometry {
    /// Clamp a paddle's top edge to the field.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.height - self.paddle_height)
    }

    /// Top-edge offset that centers a paddle vertically.
    pub fn paddle_spawn_y(&self) -> f32 {
        self.height / 2.0 - self.paddle_height / 2.0
    }

    /// Top-left offset that centers the ball.
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.width / 2.0 - self.ball_size / 2.0,
            self.height / 2.0 - self.ball_size / 2.0,
        )
    }
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self {
            width: Params::FIELD_WIDTH,
            height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_size: Params::BALL_SIZE,
        }
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field: FieldGeometry,
    pub user_paddle_step: f32,
    pub ai_paddle_step: f32,
    pub ball_speed: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field: FieldGeometry::default(),
            user_paddle_step: Params::USER_PADDLE_STEP,
            ai_paddle_step: Params::AI_PADDLE_STEP,
            ball_speed: Params::BALL_SPEED,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_paddle_y() {
        let field = FieldGeometry::default();
        assert_eq!(field.clamp_paddle_y(-25.0), 0.0);
        assert_eq!(
            field.clamp_paddle_y(1000.0),
            field.height - field.paddle_height
        );
        let valid_y = 80.0;
        assert_eq!(field.clamp_paddle_y(valid_y), valid_y);
    }

    #[test]
    fn test_paddle_spawn_is_centered() {
        let field = FieldGeometry::default();
        let y = field.paddle_spawn_y();
        assert_eq!(y, 80.0, "100 - 40/2 for the default field");
        assert_eq!(y, field.clamp_paddle_y(y), "spawn is in bounds");
    }

    #[test]
    fn test_ball_spawn_is_centered() {
        let field = FieldGeometry::default();
        let spawn = field.ball_spawn();
        assert_eq!(spawn.x, field.width / 2.0 - field.ball_size / 2.0);
        assert_eq!(spawn.y, field.height / 2.0 - field.ball_size / 2.0);
    }
}
