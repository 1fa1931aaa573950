//! One fixed step of gameplay

use super::state::{GamePhase, Session};
use crate::geometry::overlaps;

/// Player intent sampled for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move paddle left (held)
    pub left: bool,
    /// Move paddle right (held)
    pub right: bool,
    /// Start a new round (only honoured once the round is over)
    pub restart: bool,
}

/// Things that happened during a tick, for the frame loop to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Brick at this arena index was destroyed
    BrickDestroyed(usize),
    /// Round ended in the given phase with this score
    RoundEnded { phase: GamePhase, score: u32 },
    /// Session score beat the stored best and replaced it
    NewBestScore(u32),
    /// Round restarted from scratch
    Restarted,
}

/// Advance the session by one frame.
///
/// Paddle input applies in every phase. Physics and scoring run only while
/// the round is `Running`. A restart request during a finished round resets
/// the session and ends the tick.
pub fn tick(session: &mut Session, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart && session.phase.is_round_over() {
        session.reset();
        events.push(GameEvent::Restarted);
        return events;
    }

    let width = session.config.width;
    let speed = session.config.paddle_speed;
    if input.left {
        session.paddle.shift(-speed, width);
    }
    if input.right {
        session.paddle.shift(speed, width);
    }

    if session.phase != GamePhase::Running {
        return events;
    }

    step_ball(session, &mut events);
    check_round_end(session, &mut events);

    events
}

/// Integrate the ball and resolve wall, paddle and brick contacts
fn step_ball(session: &mut Session, events: &mut Vec<GameEvent>) {
    let field_w = session.config.width;
    let ball = &mut session.ball;
    ball.integrate();

    // Each axis reflects at most once per tick
    let reflect_x = ball.x <= 0.0 || ball.x >= field_w - ball.size;
    let mut reflect_y = ball.y <= 0.0;

    // Only a descending ball bounces, so it cannot stick inside the paddle
    if ball.dy > 0.0 && overlaps(ball.rect(), session.paddle.rect()) {
        reflect_y = true;
    }

    // First active brick in index order wins; the rest wait for a later tick
    let ball_rect = ball.rect();
    if let Some((index, brick)) = session
        .bricks
        .iter_mut()
        .enumerate()
        .find(|(_, b)| b.active && overlaps(ball_rect, b.rect()))
    {
        brick.active = false;
        session.score += 1;
        reflect_y = true;
        log::debug!("brick {} destroyed, score {}", index, session.score);
        events.push(GameEvent::BrickDestroyed(index));
    }

    if reflect_x {
        ball.dx = -ball.dx;
    }
    if reflect_y {
        ball.dy = -ball.dy;
    }
}

/// Move to `Won` or `GameOver` when a trigger fires, recording a new best
/// score exactly once on the way out
fn check_round_end(session: &mut Session, events: &mut Vec<GameEvent>) {
    let next = if session.all_bricks_destroyed() {
        GamePhase::Won
    } else if session.ball.y >= session.config.height - session.ball.size {
        GamePhase::GameOver
    } else {
        return;
    };

    session.phase = next;
    events.push(GameEvent::RoundEnded {
        phase: next,
        score: session.score,
    });

    if session.score > session.best_score {
        session.best_score = session.score;
        events.push(GameEvent::NewBestScore(session.score));
    }
}
