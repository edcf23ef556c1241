//! Board geometry and gameplay constants, in board units (one cell is 101×83).

use std::time::Duration;

// ── Board ─────────────────────────────────────────────────────────────────────

pub const CELL_WIDTH: f64 = 101.0;
pub const CELL_HEIGHT: f64 = 83.0;
pub const BOARD_COLUMNS: usize = 5;
pub const BOARD_ROWS: usize = 6;

/// Enemies wrap once their x reaches this edge.
pub const BOARD_RIGHT_EDGE: f64 = 505.0;

// ── Player lattice ────────────────────────────────────────────────────────────

pub const PLAYER_START_X: f64 = 202.0;
pub const PLAYER_START_Y: f64 = 390.0;
pub const PLAYER_MIN_X: f64 = 0.0;
pub const PLAYER_MAX_X: f64 = 404.0;
pub const PLAYER_MAX_Y: f64 = 390.0;
pub const COLUMN_STEP: f64 = 101.0;
pub const ROW_STEP: f64 = 85.0;

/// Pressing up from a row at or above this y reaches the water.
pub const GOAL_THRESHOLD_Y: f64 = 85.0;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_LANES: [f64; 3] = [60.0, 145.0, 230.0];
pub const ENEMY_SPAWN_X: f64 = -100.0;
pub const ENEMY_BASE_SPEED: f64 = 50.0;
pub const ENEMY_SPEED_JITTER: f64 = 200.0;

/// Overlap tolerances, tighter than the sprites to ignore transparent padding.
pub const ENEMY_HIT_DX: f64 = 70.0;
pub const ENEMY_HIT_DY: f64 = 30.0;

// ── Gems ──────────────────────────────────────────────────────────────────────

pub const GEM_COLUMNS: [f64; 5] = [0.0, 101.0, 202.0, 303.0, 404.0];
pub const GEM_ROWS: [f64; 3] = [80.0, 165.0, 250.0];
pub const GEM_HIT_DY: f64 = 50.0;

// ── Scoring & progression ─────────────────────────────────────────────────────

pub const STARTING_LIVES: u8 = 3;
pub const STARTING_LEVEL: u32 = 1;
pub const ENEMY_PENALTY: i32 = 5;
pub const GOAL_BASE_REWARD: i32 = 5;
pub const ENEMIES_PER_LEVEL: u32 = 5;

// ── Pools ─────────────────────────────────────────────────────────────────────

pub const ENEMY_POOL_SIZE: usize = ENEMY_LANES.len();
pub const GEM_POOL_SIZE: usize = 2;

// ── Frame pacing (terminal front end) ─────────────────────────────────────────

pub const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Upper bound on a single tick's delta so a stalled terminal can't teleport enemies.
pub const MAX_FRAME_DT: f64 = 0.1;
