//! Entity behaviour.
//!
//! Enemies and gems never touch the player: they answer overlap queries
//! and report what happened, and the session applies the consequences.
//! All randomness comes through an injected `Rng` so callers control
//! determinism (tests use a seeded `StdRng`).

use log::{debug, info};
use rand::Rng;

use crate::config::{
    BOARD_RIGHT_EDGE, COLUMN_STEP, ENEMIES_PER_LEVEL, ENEMY_BASE_SPEED, ENEMY_HIT_DX,
    ENEMY_HIT_DY, ENEMY_LANES, ENEMY_PENALTY, ENEMY_SPAWN_X, ENEMY_SPEED_JITTER, GEM_COLUMNS,
    GEM_HIT_DY, GEM_ROWS, GOAL_BASE_REWARD, GOAL_THRESHOLD_Y, PLAYER_MAX_X, PLAYER_MAX_Y,
    PLAYER_MIN_X, PLAYER_START_X, PLAYER_START_Y, ROW_STEP, STARTING_LEVEL, STARTING_LIVES,
};
use crate::entities::{
    CharacterId, Direction, Enemy, Gem, GemKind, Panel, Player, PlayerStatus, Position,
};
use crate::sinks::UiSink;

// ── Enemy ─────────────────────────────────────────────────────────────────────

/// What a single `Enemy::update` observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnemyStep {
    pub hit_player: bool,
    /// The enemy crossed the right edge and needs `reset` before the next frame.
    pub passed: bool,
}

impl Enemy {
    /// New enemy parked off-screen on `lane`, speed drawn for level 1.
    pub fn new(lane: usize, rng: &mut impl Rng) -> Self {
        let lane = lane % ENEMY_LANES.len();
        Enemy {
            pos: Position::new(ENEMY_SPAWN_X, ENEMY_LANES[lane]),
            speed: draw_speed(STARTING_LEVEL, rng),
            lane,
        }
    }

    /// Advance by `speed * dt`, then test the player, then the right edge.
    pub fn update(&mut self, dt: f64, player: &Position) -> EnemyStep {
        self.pos.x += self.speed * dt;
        EnemyStep {
            hit_player: self.check_collision(player),
            passed: self.pos.x >= BOARD_RIGHT_EDGE,
        }
    }

    /// Strict on both axes: a gap of exactly 70 or 30 is a miss.
    pub fn check_collision(&self, player: &Position) -> bool {
        (player.x - self.pos.x).abs() < ENEMY_HIT_DX && (player.y - self.pos.y).abs() < ENEMY_HIT_DY
    }

    /// Back to the left edge on a random lane, faster as `level` grows.
    pub fn reset(&mut self, level: u32, rng: &mut impl Rng) {
        self.lane = rng.gen_range(0..ENEMY_LANES.len());
        self.pos = Position::new(ENEMY_SPAWN_X, ENEMY_LANES[self.lane]);
        self.speed = draw_speed(level, rng);
        debug!(
            "enemy reset: lane {} speed {:.1} (level {})",
            self.lane, self.speed, level
        );
    }
}

/// `base * level + U[0, jitter)`
pub fn draw_speed(level: u32, rng: &mut impl Rng) -> f64 {
    ENEMY_BASE_SPEED * f64::from(level) + rng.gen_range(0.0..ENEMY_SPEED_JITTER)
}

// ── Gem ───────────────────────────────────────────────────────────────────────

impl Gem {
    pub fn new(rng: &mut impl Rng) -> Self {
        let (pos, kind) = random_gem_cell(rng);
        Gem { pos, kind }
    }

    /// Gems only register when the player stands exactly on their column.
    /// Unlike enemies there is no x tolerance.
    pub fn check_collision(&self, player: &Position) -> bool {
        player.x == self.pos.x && (player.y - self.pos.y).abs() < GEM_HIT_DY
    }

    /// Relocate in place after a pickup.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        let (pos, kind) = random_gem_cell(rng);
        self.pos = pos;
        self.kind = kind;
        debug!("gem moved to ({}, {}) as {:?}", pos.x, pos.y, kind);
    }
}

fn random_gem_cell(rng: &mut impl Rng) -> (Position, GemKind) {
    let x = GEM_COLUMNS[rng.gen_range(0..GEM_COLUMNS.len())];
    let y = GEM_ROWS[rng.gen_range(0..GEM_ROWS.len())];
    let kind = GemKind::ALL[rng.gen_range(0..GemKind::ALL.len())];
    (Position::new(x, y), kind)
}

// ── Player ────────────────────────────────────────────────────────────────────

impl Player {
    pub fn is_playing(&self) -> bool {
        self.status == PlayerStatus::Playing
    }

    pub fn name(&self) -> &'static str {
        self.character.name()
    }

    pub fn select_character(&mut self, id: CharacterId) {
        self.character = id;
    }

    /// Begin a new run: fresh counters, full hearts, input enabled.
    pub fn start_game(&mut self, ui: &mut impl UiSink) {
        self.level = STARTING_LEVEL;
        self.lives = STARTING_LIVES;
        self.score = 0;
        self.enemies_avoided = 0;
        ui.reset_life_indicators();
        self.status = PlayerStatus::Playing;
        info!("{} starts a new run", self.name());
    }

    /// Grid-stepped movement. Ignored unless playing.
    pub fn handle_input(&mut self, direction: Direction) {
        if !self.is_playing() {
            return;
        }
        match direction {
            Direction::Left => self.pos.x = (self.pos.x - COLUMN_STEP).max(PLAYER_MIN_X),
            Direction::Right => self.pos.x = (self.pos.x + COLUMN_STEP).min(PLAYER_MAX_X),
            Direction::Down => self.pos.y = (self.pos.y + ROW_STEP).min(PLAYER_MAX_Y),
            Direction::Up => {
                // Scoring sends the player back to the start tile.
                if self.pos.y <= GOAL_THRESHOLD_Y {
                    self.reach_goal();
                } else {
                    self.pos.y -= ROW_STEP;
                }
            }
        }
    }

    pub fn meet_enemy(&mut self, ui: &mut impl UiSink) {
        self.reset();
        self.lives = self.lives.saturating_sub(1);
        self.score -= ENEMY_PENALTY;
        debug!("hit by an enemy: {} lives left, score {}", self.lives, self.score);
        if self.lives > 0 {
            ui.remove_life_indicator();
        } else {
            self.game_over(ui);
        }
    }

    pub fn reach_goal(&mut self) {
        self.reset();
        self.score += GOAL_BASE_REWARD + self.level as i32;
        debug!("reached the water, score {}", self.score);
    }

    /// One more enemy made it across; every fifth raises the level.
    pub fn level_up(&mut self) {
        self.enemies_avoided += 1;
        let level = STARTING_LEVEL + self.enemies_avoided / ENEMIES_PER_LEVEL;
        if level != self.level {
            info!("level {} reached", level);
        }
        self.level = level;
    }

    pub fn collect_gem(&mut self, kind: GemKind) {
        self.score += kind.points();
        debug!("collected {:?} gem, score {}", kind, self.score);
    }

    /// Back to the start tile.
    pub fn reset(&mut self) {
        self.pos = Position::new(PLAYER_START_X, PLAYER_START_Y);
    }

    pub fn game_over(&mut self, ui: &mut impl UiSink) {
        self.status = PlayerStatus::GameOver;
        let message = self.end_message();
        info!("game over: {}", message);
        ui.show_end_message(&message);
        ui.set_panel_visibility(Panel::ScorePanel, false);
        ui.set_panel_visibility(Panel::WinLoseMessage, true);
    }

    /// Only the sign of the score matters: zero still wins.
    pub fn end_message(&self) -> String {
        let verb = if self.score < 0 { "loses" } else { "wins" };
        format!("{} {}, with {} points!", self.name(), verb, self.score)
    }
}
