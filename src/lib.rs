//! Brick Breaker - single-screen paddle and ball arcade game
//!
//! Core modules:
//! - `geometry`: axis-aligned rectangles and overlap tests
//! - `game`: entities, round phases and the per-frame step
//! - `app`: fixed-delay frame loop and frame rendering
//! - `display`: `Renderer` trait with SDL2 canvas and software backends
//! - `input`: per-frame keyboard sampling
//! - `highscore`: best score persistence
//! - `settings`: JSON settings file

pub mod app;
pub mod display;
pub mod game;
pub mod geometry;
pub mod highscore;
pub mod input;
pub mod settings;
pub mod util;

pub use app::{render_frame, run, LoopOptions};
pub use game::{GameConfig, GamePhase, Session};
pub use highscore::{BestScoreFile, MemoryScoreStore, ScoreStore};
pub use settings::{Backend, Settings};
