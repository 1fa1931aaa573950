//! Gameplay: entities, phases and the per-frame step
//!
//! Nothing in here touches SDL2, the filesystem or the clock. The frame
//! loop feeds a `TickInput` in and reacts to the `GameEvent`s coming out.

pub mod state;
pub mod tick;

pub use state::{
    brick_grid, Ball, Brick, GameConfig, GamePhase, Paddle, Session, BRICKS_PER_ROW, BRICK_COUNT,
};
pub use tick::{tick, GameEvent, TickInput};
