//! Game entities and the session that owns them

use crate::geometry::Rect;

/// Number of brick slots in the arena
pub const BRICK_COUNT: usize = 20;
/// Bricks per row
pub const BRICKS_PER_ROW: usize = 10;
pub const BRICK_WIDTH: i32 = 80;
pub const BRICK_HEIGHT: i32 = 30;
/// Gap between neighbouring bricks
pub const BRICK_GAP: i32 = 5;
/// Offset of the grid from the top-left corner of the playfield
pub const BRICK_MARGIN: i32 = 15;

/// Distance between the paddle's bottom edge and the playfield bottom
const PADDLE_BOTTOM_GAP: f32 = 10.0;
/// Extra clearance between the ball and the paddle at serve time
const BALL_SERVE_GAP: f32 = 20.0;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    /// Ball fell past the bottom edge
    GameOver,
    /// Every brick destroyed
    Won,
}

impl GamePhase {
    /// True once the round has ended and only restart can leave this phase
    pub fn is_round_over(&self) -> bool {
        !matches!(self, GamePhase::Running)
    }
}

/// Playfield geometry and motion constants, fixed for a whole process run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle movement per frame while a direction is held
    pub paddle_speed: f32,
    pub ball_size: f32,
    /// Initial speed on each axis, pixels per frame
    pub ball_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 880.0,
            height: 800.0,
            paddle_width: 400.0,
            paddle_height: 20.0,
            paddle_speed: 20.0,
            ball_size: 15.0,
            ball_speed: 10.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Centred horizontally near the bottom of the playfield
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: (config.width - config.paddle_width) / 2.0,
            y: config.height - config.paddle_height - PADDLE_BOTTOM_GAP,
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Shift horizontally, keeping the paddle inside `[0, field_width]`
    pub fn shift(&mut self, dx: f32, field_width: f32) {
        self.x = (self.x + dx).clamp(0.0, (field_width - self.width).max(0.0));
    }
}

/// The ball. `x`/`y` is the top-left corner of its square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub size: f32,
}

impl Ball {
    /// Served from above the paddle, heading up and to the right
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.width / 2.0,
            y: config.height - config.paddle_height - config.ball_size - BALL_SERVE_GAP,
            dx: config.ball_speed,
            dy: -config.ball_speed,
            size: config.ball_size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }

    /// Advance one frame along the current velocity
    #[inline]
    pub fn integrate(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brick {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub active: bool,
}

impl Brick {
    /// Brick for grid slot `index`, active
    pub fn at_slot(index: usize) -> Self {
        let col = (index % BRICKS_PER_ROW) as i32;
        let row = (index / BRICKS_PER_ROW) as i32;
        Self {
            x: col * (BRICK_WIDTH + BRICK_GAP) + BRICK_MARGIN,
            y: row * (BRICK_HEIGHT + BRICK_GAP) + BRICK_MARGIN,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            active: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x as f32,
            self.y as f32,
            self.width as f32,
            self.height as f32,
        )
    }
}

/// Fresh brick arena with every slot active
pub fn brick_grid() -> [Brick; BRICK_COUNT] {
    std::array::from_fn(Brick::at_slot)
}

/// Everything one game needs, owned by the frame loop
#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: [Brick; BRICK_COUNT],
    pub score: u32,
    /// Best score seen so far, persisted or not
    pub best_score: u32,
}

impl Session {
    pub fn new(config: GameConfig, best_score: u32) -> Self {
        Self {
            config,
            phase: GamePhase::Running,
            paddle: Paddle::new(&config),
            ball: Ball::new(&config),
            bricks: brick_grid(),
            score: 0,
            best_score,
        }
    }

    /// Put paddle, ball, bricks, score and phase back to their initial
    /// values. The best score survives.
    pub fn reset(&mut self) {
        *self = Self::new(self.config, self.best_score);
    }

    pub fn active_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    pub fn all_bricks_destroyed(&self) -> bool {
        self.bricks.iter().all(|b| !b.active)
    }
}
