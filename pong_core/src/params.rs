/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 200.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 40.0;
    pub const USER_PADDLE_STEP: f32 = 10.0; // per key event
    pub const AI_PADDLE_STEP: f32 = 3.0; // per tick

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 3.0; // per tick, each axis

    // Score
    pub const WIN_SCORE: u8 = 10;
}
