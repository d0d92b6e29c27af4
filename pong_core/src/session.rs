use glam::Vec2;
use hecs::World;
use log::info;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::{Events, GameRng, InputQueue, PaddleMove, Score};
use crate::state::GameState;
use crate::{create_ball, create_paddle, step};

/// Everything a renderer needs after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    pub user_paddle_y: f32,
    pub computer_paddle_y: f32,
    pub ball_x: f32,
    pub ball_y: f32,
    pub user_score: u8,
    pub computer_score: u8,
    pub message: &'static str,
}

/// One complete game, from `start()` to a finished scoreboard.
///
/// Owns the world and every piece of per-session state; sessions are
/// independent of each other.
pub struct GameSession {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub input_queue: InputQueue,
    pub rng: GameRng,
    pub state: GameState,
}

impl GameSession {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let field = config.field;
        create_paddle(&mut world, Side::User, field.paddle_spawn_y());
        create_paddle(&mut world, Side::Computer, field.paddle_spawn_y());
        create_ball(
            &mut world,
            field.ball_spawn(),
            Vec2::splat(config.ball_speed),
        );

        Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            input_queue: InputQueue::new(),
            rng: GameRng::new(seed),
            state: GameState::Idle,
        }
    }

    /// Reset every piece of session state and begin play.
    ///
    /// This is the sole external command: scores go to zero, paddles and
    /// ball recenter, the ball departs at full speed toward the computer's
    /// side, stale input requests are discarded.
    pub fn start(&mut self) {
        let field = self.config.field;
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = field.paddle_spawn_y();
        }
        let serve = Vec2::splat(self.config.ball_speed);
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = field.ball_spawn();
            ball.vel = serve;
        }
        self.score = Score::new();
        self.events.clear();
        self.input_queue.clear();
        self.state = GameState::Running;

        info!("session started, first to {}", self.config.win_score);
    }

    /// Queue a move request for the user paddle.
    ///
    /// Requests are consumed at the start of the next tick. Outside of a
    /// running game they are silently dropped.
    pub fn push_input(&mut self, mv: PaddleMove) {
        if self.state.is_running() {
            self.input_queue.push(mv);
        }
    }

    /// Run one tick of the simulation and report the resulting frame.
    ///
    /// While the session is idle or finished, nothing moves and the frame
    /// is simply the current one.
    pub fn tick(&mut self) -> RenderFrame {
        if self.state.is_running() {
            step(
                &mut self.world,
                &self.config,
                &mut self.score,
                &mut self.events,
                &mut self.input_queue,
                &mut self.rng,
            );

            if let Some(side) = self.score.winner(self.config.win_score) {
                self.state = GameState::Finished(side);
                info!(
                    "game over: {:?} wins {}-{}",
                    side, self.score.user, self.score.computer
                );
            }
        }

        self.frame()
    }

    /// Snapshot of everything a renderer consumes.
    pub fn frame(&self) -> RenderFrame {
        let mut user_paddle_y = 0.0;
        let mut computer_paddle_y = 0.0;
        for (_entity, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::User => user_paddle_y = paddle.y,
                Side::Computer => computer_paddle_y = paddle.y,
            }
        }

        let mut ball_x = 0.0;
        let mut ball_y = 0.0;
        for (_entity, ball) in self.world.query::<&Ball>().iter() {
            ball_x = ball.pos.x;
            ball_y = ball.pos.y;
        }

        RenderFrame {
            user_paddle_y,
            computer_paddle_y,
            ball_x,
            ball_y,
            user_score: self.score.user,
            computer_score: self.score.computer,
            message: self.state.message(),
        }
    }
}
