//! The frame loop: input, tick, persistence, render, sleep

use std::thread;
use std::time::Duration;

use crate::display::{text_width, Renderer, BLACK, RED, WHITE, YELLOW};
use crate::game::{tick, GameEvent, GamePhase, Session};
use crate::highscore::ScoreStore;
use crate::input::InputSource;
use crate::settings::Settings;
use crate::util::FpsCounter;

/// Scale of the HUD font (5x7 glyphs become 15x21)
pub const TEXT_SCALE: u32 = 3;
/// Scale of the FPS readout
const FPS_SCALE: u32 = 2;
const HUD_MARGIN: i32 = 20;
/// HUD baseline distance from the bottom of the playfield
const HUD_FROM_BOTTOM: i32 = 100;

pub const GAME_OVER_MESSAGE: &str = "Game Over! Press R to Restart";
pub const WIN_MESSAGE: &str = "You Win! Press R to Restart";

/// Knobs for the frame loop that aren't gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// Fixed sleep after each frame
    pub frame_delay: Duration,
    /// Start with the FPS readout visible
    pub show_fps: bool,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(16),
            show_fps: false,
        }
    }
}

impl From<&Settings> for LoopOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            frame_delay: settings.frame_delay(),
            show_fps: settings.show_fps,
        }
    }
}

/// Run frames until the input asks to quit.
///
/// New best scores are written through `store` the frame they happen; a
/// failed write is logged and play goes on. Only a failing `present` ends
/// the loop early.
pub fn run<R, I, S>(
    session: &mut Session,
    renderer: &mut R,
    input: &mut I,
    store: &mut S,
    options: &LoopOptions,
) -> Result<(), String>
where
    R: Renderer + ?Sized,
    I: InputSource + ?Sized,
    S: ScoreStore + ?Sized,
{
    let mut fps_counter = FpsCounter::new(60);
    let mut show_fps = options.show_fps;

    loop {
        let avg_fps = fps_counter.tick();

        let frame = input.poll();
        if frame.quit {
            log::info!("Quit requested");
            break;
        }
        if frame.toggle_fps {
            show_fps = !show_fps;
        }

        for event in tick(session, &frame.tick_input()) {
            handle_event(event, store);
        }

        render_frame(renderer, session, show_fps.then_some(avg_fps))?;

        if !options.frame_delay.is_zero() {
            thread::sleep(options.frame_delay);
        }
    }

    Ok(())
}

fn handle_event<S: ScoreStore + ?Sized>(event: GameEvent, store: &mut S) {
    match event {
        GameEvent::BrickDestroyed(_) => {},
        GameEvent::RoundEnded { phase, score } => match phase {
            GamePhase::Won => log::info!("All bricks cleared, score {}", score),
            _ => log::info!("Game over, score {}", score),
        },
        GameEvent::NewBestScore(score) => match store.save(score) {
            Ok(()) => log::info!("New best score {} saved", score),
            Err(e) => log::error!("Could not save best score {}: {}", score, e),
        },
        GameEvent::Restarted => log::info!("Round restarted"),
    }
}

/// Draw one complete frame and present it
pub fn render_frame<R: Renderer + ?Sized>(
    renderer: &mut R,
    session: &Session,
    fps: Option<f32>,
) -> Result<(), String> {
    let width = renderer.width() as i32;
    let height = renderer.height() as i32;

    renderer.clear(BLACK);

    for brick in session.bricks.iter().filter(|b| b.active) {
        renderer.fill_rect(
            brick.x,
            brick.y,
            brick.width.max(0) as u32,
            brick.height.max(0) as u32,
            RED,
        );
    }

    let (x, y, w, h) = session.paddle.rect().to_pixels();
    renderer.fill_rect(x, y, w, h, WHITE);

    let (x, y, w, h) = session.ball.rect().to_pixels();
    renderer.fill_rect(x, y, w, h, WHITE);

    let hud_y = height - HUD_FROM_BOTTOM;
    let score = format!("Score: {}", session.score);
    renderer.draw_text(HUD_MARGIN, hud_y, &score, TEXT_SCALE, WHITE);

    let best = format!("Best Score: {}", session.best_score);
    let best_x = width - HUD_MARGIN - text_width(&best, TEXT_SCALE) as i32;
    renderer.draw_text(best_x, hud_y, &best, TEXT_SCALE, WHITE);

    let message = match session.phase {
        GamePhase::Running => None,
        GamePhase::GameOver => Some(GAME_OVER_MESSAGE),
        GamePhase::Won => Some(WIN_MESSAGE),
    };
    if let Some(message) = message {
        let x = (width - text_width(message, TEXT_SCALE) as i32) / 2;
        let y = height / 2 - 40;
        renderer.draw_text(x, y, message, TEXT_SCALE, WHITE);
    }

    if let Some(fps) = fps {
        let text = format!("FPS {}", fps as u32);
        renderer.draw_text(4, 4, &text, FPS_SCALE, YELLOW);
    }

    renderer.present()
}
