use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub user: u8,
    pub computer: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_user(&mut self) {
        self.user += 1;
    }

    pub fn increment_computer(&mut self) {
        self.computer += 1;
    }

    /// First side to reach `win_score`, if any.
    pub fn winner(&self, win_score: u8) -> Option<Side> {
        if self.user >= win_score {
            Some(Side::User)
        } else if self.computer >= win_score {
            Some(Side::Computer)
        } else {
            None
        }
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub user_scored: bool,
    pub computer_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.user_scored = false;
        self.computer_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// A discrete move request for the user paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleMove {
    Up,
    Down,
}

/// Queued paddle-move requests from the key-event source.
///
/// Requests accumulate between ticks and are consumed, in arrival order,
/// at the start of the next tick.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    moves: Vec<PaddleMove>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: PaddleMove) {
        self.moves.push(mv);
    }

    /// Take every queued request, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<PaddleMove> {
        std::mem::take(&mut self.moves)
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Random number generator, seeded so a session can be replayed
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(1972)
    }
}
