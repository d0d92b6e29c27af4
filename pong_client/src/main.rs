//! Macroquad frontend for the Pong core.
//!
//! The window's frame callback is the tick schedule: one simulation tick
//! per rendered frame. Key presses become queued move requests, and the
//! per-tick frame is drawn as rectangles and text.

use clap::Parser;
use log::info;
use macroquad::prelude::*;
use pong_core::{Config, GameSession, PaddleMove, Params, RenderFrame};

/// Window pixels per field unit.
const SCALE: f32 = 2.0;

#[derive(Parser, Debug)]
#[command(version, about = "Classic Pong against the computer")]
struct Args {
    /// Seed for the serve coin flips
    #[arg(long, default_value_t = 1972)]
    seed: u64,

    /// Points needed to win
    #[arg(long, default_value_t = Params::WIN_SCORE)]
    win_score: u8,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Pong".to_owned(),
        window_width: (Params::FIELD_WIDTH * SCALE) as i32,
        window_height: (Params::FIELD_HEIGHT * SCALE) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = Config {
        win_score: args.win_score,
        ..Config::default()
    };
    let mut session = GameSession::new(config, args.seed);

    info!("controls: arrow keys or W/S to move, space to start");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Space) && !session.state.is_running() {
            session.start();
        }
        if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
            session.push_input(PaddleMove::Up);
        }
        if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
            session.push_input(PaddleMove::Down);
        }

        let frame = session.tick();
        draw(&frame, &session);

        next_frame().await;
    }
}

fn draw(frame: &RenderFrame, session: &GameSession) {
    let field = &session.config.field;

    clear_background(BLACK);

    // Dashed center line
    let mid_x = field.width * SCALE / 2.0;
    let mut y = 0.0;
    while y < field.height * SCALE {
        draw_line(mid_x, y, mid_x, y + 10.0, 2.0, DARKGRAY);
        y += 20.0;
    }

    draw_rectangle(
        0.0,
        frame.user_paddle_y * SCALE,
        field.paddle_width * SCALE,
        field.paddle_height * SCALE,
        WHITE,
    );
    draw_rectangle(
        (field.width - field.paddle_width) * SCALE,
        frame.computer_paddle_y * SCALE,
        field.paddle_width * SCALE,
        field.paddle_height * SCALE,
        WHITE,
    );
    draw_rectangle(
        frame.ball_x * SCALE,
        frame.ball_y * SCALE,
        field.ball_size * SCALE,
        field.ball_size * SCALE,
        WHITE,
    );

    draw_text(
        &frame.user_score.to_string(),
        field.width * SCALE * 0.25,
        50.0,
        48.0,
        WHITE,
    );
    draw_text(
        &frame.computer_score.to_string(),
        field.width * SCALE * 0.75,
        50.0,
        48.0,
        WHITE,
    );

    let banner = if !frame.message.is_empty() {
        frame.message
    } else if !session.state.is_running() {
        "Press space to play"
    } else {
        ""
    };
    if !banner.is_empty() {
        draw_centered(banner, mid_x, field.height * SCALE / 2.0 - 40.0, 32, WHITE);
        if session.state.is_finished() {
            draw_centered(
                "Press space to play again",
                mid_x,
                field.height * SCALE / 2.0 - 10.0,
                24,
                GRAY,
            );
        }
    }
}

fn draw_centered(text: &str, center_x: f32, y: f32, font_size: u16, color: Color) {
    let dims = measure_text(text, None, font_size, 1.0);
    draw_text(text, center_x - dims.width / 2.0, y, font_size as f32, color);
}
