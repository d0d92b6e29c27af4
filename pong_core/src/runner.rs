//! The seam between the simulation and its host.
//!
//! The host owns frame pacing, key events, and presentation; the loop owns
//! nothing but the decision to keep going. It asks the scheduler for the
//! next frame only while the session is running, so a finished game stops
//! the schedule by itself.

use crate::resources::PaddleMove;
use crate::session::{GameSession, RenderFrame};

/// Frame-pacing signal from the host.
pub trait TickScheduler {
    /// Block or yield until the host is ready for a new frame. Returns
    /// false when the host is shutting down.
    fn next_tick(&mut self) -> bool;
}

/// Source of discrete paddle-move key events.
///
/// Anything other than an up/down request has already been filtered out;
/// the loop never sees unrecognized keys.
pub trait InputSource {
    fn poll(&mut self, out: &mut Vec<PaddleMove>);
}

/// Consumer of the per-tick render frame.
pub trait RenderSink {
    fn present(&mut self, frame: &RenderFrame);
}

/// Drives a session: one tick per scheduler signal, for as long as the
/// game runs.
pub struct GameLoop<S, I, R> {
    pub session: GameSession,
    scheduler: S,
    input: I,
    sink: R,
}

impl<S: TickScheduler, I: InputSource, R: RenderSink> GameLoop<S, I, R> {
    pub fn new(session: GameSession, scheduler: S, input: I, sink: R) -> Self {
        Self {
            session,
            scheduler,
            input,
            sink,
        }
    }

    /// Start the session and tick until it finishes or the host stops.
    pub fn run(&mut self) {
        self.session.start();
        self.sink.present(&self.session.frame());

        let mut moves = Vec::new();
        while self.session.state.is_running() {
            if !self.scheduler.next_tick() {
                break;
            }

            moves.clear();
            self.input.poll(&mut moves);
            for mv in moves.drain(..) {
                self.session.push_input(mv);
            }

            let frame = self.session.tick();
            self.sink.present(&frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Ball;
    use crate::config::Config;
    use crate::state::GameState;

    /// Grants a fixed number of frames, then reports the host stopping.
    struct FrameBudget(u32);

    impl TickScheduler for FrameBudget {
        fn next_tick(&mut self) -> bool {
            if self.0 == 0 {
                return false;
            }
            self.0 -= 1;
            true
        }
    }

    /// Replays a scripted set of key events on the first poll.
    struct Scripted(Vec<PaddleMove>);

    impl InputSource for Scripted {
        fn poll(&mut self, out: &mut Vec<PaddleMove>) {
            out.append(&mut self.0);
        }
    }

    /// Remembers every presented frame.
    #[derive(Default)]
    struct Recorder(Vec<RenderFrame>);

    impl RenderSink for Recorder {
        fn present(&mut self, frame: &RenderFrame) {
            self.0.push(*frame);
        }
    }

    #[test]
    fn test_loop_stops_when_host_stops() {
        let session = GameSession::new(Config::new(), 1972);
        let mut game_loop =
            GameLoop::new(session, FrameBudget(5), Scripted(vec![]), Recorder::default());

        game_loop.run();

        // Initial frame plus one per granted tick.
        assert_eq!(game_loop.sink.0.len(), 6);
        assert!(
            game_loop.session.state.is_running(),
            "game itself never ended"
        );
    }

    #[test]
    fn test_loop_stops_scheduling_once_finished() {
        let mut config = Config::new();
        config.win_score = 0; // every tick ends immediately
        let session = GameSession::new(config, 1972);
        let mut game_loop =
            GameLoop::new(session, FrameBudget(100), Scripted(vec![]), Recorder::default());

        game_loop.run();

        assert_eq!(game_loop.session.state, GameState::Finished(crate::Side::User));
        assert_eq!(
            game_loop.sink.0.len(),
            2,
            "initial frame, one tick, then no more scheduling"
        );
        assert_eq!(game_loop.sink.0.last().unwrap().message, "You win!");
    }

    #[test]
    fn test_polled_input_reaches_the_user_paddle() {
        let session = GameSession::new(Config::new(), 1972);
        let spawn_y = session.config.field.paddle_spawn_y();
        let mut game_loop = GameLoop::new(
            session,
            FrameBudget(1),
            Scripted(vec![PaddleMove::Up, PaddleMove::Up]),
            Recorder::default(),
        );

        game_loop.run();

        let last = game_loop.sink.0.last().unwrap();
        assert_eq!(last.user_paddle_y, spawn_y - 20.0);
    }

    #[test]
    fn test_ball_advances_once_per_granted_frame() {
        let session = GameSession::new(Config::new(), 1972);
        let mut game_loop =
            GameLoop::new(session, FrameBudget(3), Scripted(vec![]), Recorder::default());

        game_loop.run();

        let speed = game_loop.session.config.ball_speed;
        let spawn_x = game_loop.session.config.field.ball_spawn().x;
        for (_entity, ball) in game_loop.session.world.query::<&Ball>().iter() {
            assert_eq!(ball.pos.x, spawn_x + 3.0 * speed);
        }
    }
}
