//! Game session controller.
//!
//! Owns the player and the enemy/gem pools. Input is buffered with
//! `push_input` and only applied inside `tick`, after the entities have
//! moved, so nothing changes mid-update.

use std::collections::VecDeque;

use log::{debug, info};
use rand::Rng;

use crate::config::{ENEMY_POOL_SIZE, GEM_POOL_SIZE};
use crate::entities::{CharacterId, Enemy, Gem, InputEvent, Panel, Player, Sprite};
use crate::sinks::{RenderSink, UiSink};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Menu is up; pools exist but are not on the board.
    CharacterSelect,
    Active,
}

#[derive(Debug)]
pub struct Session {
    player: Player,
    enemy_pool: Vec<Enemy>,
    gem_pool: Vec<Gem>,
    phase: Phase,
    pending: VecDeque<InputEvent>,
}

impl Session {
    /// Build the player and both pools once; they are reused for every run.
    pub fn new(rng: &mut impl Rng) -> Self {
        let enemy_pool = (0..ENEMY_POOL_SIZE).map(|lane| Enemy::new(lane, rng)).collect();
        let gem_pool = (0..GEM_POOL_SIZE).map(|_| Gem::new(rng)).collect();
        Session {
            player: Player::default(),
            enemy_pool,
            gem_pool,
            phase: Phase::CharacterSelect,
            pending: VecDeque::new(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Enemies currently on the board (empty while selecting a character).
    pub fn enemies(&self) -> &[Enemy] {
        match self.phase {
            Phase::CharacterSelect => &[],
            Phase::Active => self.enemy_pool.as_slice(),
        }
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        match self.phase {
            Phase::CharacterSelect => &mut [],
            Phase::Active => self.enemy_pool.as_mut_slice(),
        }
    }

    pub fn gems(&self) -> &[Gem] {
        match self.phase {
            Phase::CharacterSelect => &[],
            Phase::Active => self.gem_pool.as_slice(),
        }
    }

    pub fn gems_mut(&mut self) -> &mut [Gem] {
        match self.phase {
            Phase::CharacterSelect => &mut [],
            Phase::Active => self.gem_pool.as_mut_slice(),
        }
    }

    /// Queue an input for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn pending_inputs(&self) -> usize {
        self.pending.len()
    }

    /// One frame: enemies, gems, buffered input, then score/level to the UI.
    pub fn tick(&mut self, dt: f64, rng: &mut impl Rng, ui: &mut impl UiSink) {
        self.update_enemies(dt, rng, ui);
        self.update_gems(rng);
        while let Some(event) = self.pending.pop_front() {
            self.apply_input(event, ui);
        }
        ui.report_score(self.player.score);
        ui.report_level(self.player.level);
    }

    /// `tick` followed by `render`.
    pub fn frame(
        &mut self,
        dt: f64,
        rng: &mut impl Rng,
        ui: &mut impl UiSink,
        out: &mut impl RenderSink,
    ) {
        self.tick(dt, rng, ui);
        self.render(out);
    }

    /// Enemies first, gems on top, player last.
    pub fn render(&self, out: &mut impl RenderSink) {
        for enemy in self.enemies() {
            out.draw(Sprite::Enemy, enemy.pos.x, enemy.pos.y);
        }
        for gem in self.gems() {
            out.draw(Sprite::Gem(gem.kind), gem.pos.x, gem.pos.y);
        }
        let p = &self.player;
        out.draw(Sprite::Character(p.character), p.pos.x, p.pos.y);
    }

    // Enemies keep moving and wrapping after game over, but their
    // collisions and passes no longer count.
    fn update_enemies(&mut self, dt: f64, rng: &mut impl Rng, ui: &mut impl UiSink) {
        if self.phase != Phase::Active {
            return;
        }
        for enemy in self.enemy_pool.iter_mut() {
            let step = enemy.update(dt, &self.player.pos);
            if step.hit_player && self.player.is_playing() {
                debug!("enemy in lane {} hit the player", enemy.lane);
                self.player.meet_enemy(ui);
            }
            if step.passed {
                if self.player.is_playing() {
                    self.player.level_up();
                }
                enemy.reset(self.player.level, rng);
            }
        }
    }

    fn update_gems(&mut self, rng: &mut impl Rng) {
        if self.phase != Phase::Active || !self.player.is_playing() {
            return;
        }
        for gem in self.gem_pool.iter_mut() {
            if gem.check_collision(&self.player.pos) {
                self.player.collect_gem(gem.kind);
                gem.reset(rng);
            }
        }
    }

    fn apply_input(&mut self, event: InputEvent, ui: &mut impl UiSink) {
        match event {
            InputEvent::Move(direction) => self.player.handle_input(direction),
            InputEvent::SelectCharacter(id) => self.select_character(id, ui),
            InputEvent::RestartRequested => self.restart(ui),
        }
    }

    /// Start a run with `id`. Ignored outside the selection menu.
    pub fn select_character(&mut self, id: CharacterId, ui: &mut impl UiSink) {
        if self.phase != Phase::CharacterSelect {
            debug!("ignoring character selection outside the menu");
            return;
        }
        self.player.select_character(id);
        self.phase = Phase::Active;
        self.player.start_game(ui);
        ui.set_panel_visibility(Panel::SelectPlayer, false);
        ui.set_panel_visibility(Panel::ScorePanel, true);
    }

    /// Back to the selection menu. Only honoured once the run is over.
    pub fn restart(&mut self, ui: &mut impl UiSink) {
        if self.phase != Phase::Active || self.player.is_playing() {
            debug!("ignoring restart while a run is in progress");
            return;
        }
        info!("returning to character selection");
        self.phase = Phase::CharacterSelect;
        ui.set_panel_visibility(Panel::WinLoseMessage, false);
        ui.set_panel_visibility(Panel::SelectPlayer, true);
    }
}
