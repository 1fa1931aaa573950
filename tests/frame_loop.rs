use std::fs;
use std::time::Duration;

use brickbreaker::display::{PixelBuffer, RED};
use brickbreaker::game::{Ball, BRICK_COUNT};
use brickbreaker::input::{FrameInput, ScriptedInput};
use brickbreaker::{
    run, BestScoreFile, GameConfig, GamePhase, LoopOptions, MemoryScoreStore, ScoreStore, Session,
};
use tempfile::TempDir;

fn no_delay() -> LoopOptions {
    LoopOptions {
        frame_delay: Duration::ZERO,
        show_fps: false,
    }
}

fn idle(count: usize) -> ScriptedInput {
    let mut script = ScriptedInput::default();
    script.push_repeat(FrameInput::default(), count);
    script
}

fn restart() -> FrameInput {
    FrameInput {
        restart: true,
        ..FrameInput::default()
    }
}

/// Session whose ball drops past the paddle in a few frames with `score`
/// already banked
fn about_to_lose(score: u32, best: u32) -> Session {
    let mut session = Session::new(GameConfig::default(), best);
    session.paddle.x = 0.0;
    session.ball = Ball {
        x: 600.0,
        y: 760.0,
        dx: 0.0,
        dy: 10.0,
        size: 15.0,
    };
    session.score = score;
    session
}

fn screen() -> PixelBuffer {
    PixelBuffer::with_size(880, 800)
}

#[test]
fn quit_on_first_frame_leaves_session_alone() {
    let mut session = Session::new(GameConfig::default(), 0);
    let before = session.clone();
    let mut buf = screen();
    let mut input = ScriptedInput::default();
    let mut store = MemoryScoreStore::default();

    run(&mut session, &mut buf, &mut input, &mut store, &no_delay()).unwrap();

    assert_eq!(session.ball, before.ball);
    assert_eq!(session.paddle, before.paddle);
    // Nothing rendered
    assert_eq!(buf.count_color(RED), 0);
}

#[test]
fn losing_with_new_best_persists_once() {
    let mut session = about_to_lose(6, 2);
    let mut buf = screen();
    let mut input = idle(30);
    let mut store = MemoryScoreStore {
        best: 2,
        saves: 0,
    };

    run(&mut session, &mut buf, &mut input, &mut store, &no_delay()).unwrap();

    assert_eq!(session.phase, GamePhase::GameOver);
    assert_eq!(session.best_score, 6);
    assert_eq!(store.load(), 6);
    assert_eq!(store.saves, 1);
}

#[test]
fn losing_below_best_writes_nothing() {
    let mut session = about_to_lose(1, 9);
    let mut buf = screen();
    let mut input = idle(10);
    let mut store = MemoryScoreStore {
        best: 9,
        saves: 0,
    };

    run(&mut session, &mut buf, &mut input, &mut store, &no_delay()).unwrap();

    assert_eq!(session.phase, GamePhase::GameOver);
    assert_eq!(session.best_score, 9);
    assert_eq!(store.saves, 0);
}

#[test]
fn best_score_file_holds_the_maximum() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.txt");
    fs::write(&path, "4\n").unwrap();

    let mut store = BestScoreFile::new(&path);
    let mut session = about_to_lose(11, store.load());
    let mut buf = screen();
    let mut input = idle(10);

    run(&mut session, &mut buf, &mut input, &mut store, &no_delay()).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "11\n");
    assert_eq!(BestScoreFile::new(&path).load(), 11);
}

#[test]
fn restart_after_game_over_resets_everything() {
    let mut session = about_to_lose(3, 0);
    session.bricks[0].active = false;
    session.bricks[7].active = false;

    let mut input = idle(5);
    input.push_repeat(restart(), 1);
    let mut buf = screen();
    let mut store = MemoryScoreStore::default();

    run(&mut session, &mut buf, &mut input, &mut store, &no_delay()).unwrap();

    let fresh = Session::new(GameConfig::default(), 3);
    assert_eq!(session.phase, GamePhase::Running);
    assert_eq!(session.score, 0);
    assert_eq!(session.best_score, 3);
    assert_eq!(session.ball, fresh.ball);
    assert_eq!(session.paddle, fresh.paddle);
    assert!(session.bricks.iter().all(|b| b.active));

    // Last frame drawn after the restart shows the full wall again
    assert_eq!(buf.count_color(RED), BRICK_COUNT * 80 * 30);
}

#[test]
fn paddle_never_leaves_the_playfield() {
    let mut session = Session::new(GameConfig::default(), 0);
    let mut input = ScriptedInput::default();
    input.push_repeat(
        FrameInput {
            left: true,
            ..FrameInput::default()
        },
        40,
    );
    let mut buf = screen();
    let mut store = MemoryScoreStore::default();
    run(&mut session, &mut buf, &mut input, &mut store, &no_delay()).unwrap();
    assert_eq!(session.paddle.x, 0.0);

    let mut input = ScriptedInput::default();
    input.push_repeat(
        FrameInput {
            right: true,
            ..FrameInput::default()
        },
        80,
    );
    run(&mut session, &mut buf, &mut input, &mut store, &no_delay()).unwrap();
    assert_eq!(session.paddle.x, 880.0 - 400.0);
}

#[test]
fn long_idle_game_keeps_invariants() {
    let mut session = Session::new(GameConfig::default(), 0);
    let mut buf = screen();
    let mut store = MemoryScoreStore::default();

    // Run in chunks and check between them
    let mut last_score = 0;
    for _ in 0..20 {
        let mut input = idle(50);
        run(&mut session, &mut buf, &mut input, &mut store, &no_delay()).unwrap();

        assert!(session.score >= last_score);
        assert_eq!(
            session.score as usize,
            BRICK_COUNT - session.bricks.iter().filter(|b| b.active).count()
        );
        assert_eq!(
            session.phase == GamePhase::Won,
            session.bricks.iter().all(|b| !b.active)
        );
        last_score = session.score;
    }

    assert_eq!(buf.width(), 880);
    if session.phase.is_round_over() && session.score > 0 {
        assert_eq!(store.load(), session.score);
    }
}
