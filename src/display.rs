//! Rendering layer — all terminal I/O lives here.
//!
//! `TerminalView` implements both output seams of the core: draw calls are
//! collected during a frame and UI notifications update a small HUD model.
//! `present` then translates the collected frame into terminal commands.
//! No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use lane_runner::config::{
    BOARD_COLUMNS, BOARD_ROWS, CELL_HEIGHT, CELL_WIDTH, STARTING_LIVES,
};
use lane_runner::entities::{CharacterId, GemKind, Panel, Sprite, CHARACTERS};
use lane_runner::sinks::{RenderSink, UiSink};

// ── Layout ────────────────────────────────────────────────────────────────────

/// Terminal columns per board cell.
const CELL_COLS: u16 = 7;
/// Terminal rows per board cell.
const CELL_ROWS: u16 = 2;
/// Rows above the board reserved for the HUD.
const BOARD_TOP: u16 = 2;
const BOARD_LEFT: u16 = 1;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_WATER: Color = Color::DarkBlue;
const C_ROAD: Color = Color::DarkGrey;
const C_GRASS: Color = Color::DarkGreen;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_HUD_LIVES: Color = Color::Red;
const C_ENEMY: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_GEM_LOW: Color = Color::Blue;
const C_GEM_MID: Color = Color::Green;
const C_GEM_HIGH: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── Sink implementation ───────────────────────────────────────────────────────

#[derive(Debug)]
pub struct TerminalView {
    sprites: Vec<(Sprite, f64, f64)>,
    score: i32,
    level: u32,
    hearts: u8,
    end_message: String,
    select_visible: bool,
    score_visible: bool,
    message_visible: bool,
}

impl TerminalView {
    pub fn new() -> Self {
        TerminalView {
            sprites: Vec::new(),
            score: 0,
            level: 1,
            hearts: STARTING_LIVES,
            end_message: String::new(),
            select_visible: true,
            score_visible: false,
            message_visible: false,
        }
    }
}

impl RenderSink for TerminalView {
    fn draw(&mut self, sprite: Sprite, x: f64, y: f64) {
        self.sprites.push((sprite, x, y));
    }
}

impl UiSink for TerminalView {
    fn report_score(&mut self, score: i32) {
        self.score = score;
    }

    fn report_level(&mut self, level: u32) {
        self.level = level;
    }

    fn remove_life_indicator(&mut self) {
        self.hearts = self.hearts.saturating_sub(1);
    }

    fn reset_life_indicators(&mut self) {
        self.hearts = STARTING_LIVES;
    }

    fn show_end_message(&mut self, text: &str) {
        self.end_message = text.to_string();
    }

    fn set_panel_visibility(&mut self, panel: Panel, visible: bool) {
        match panel {
            Panel::SelectPlayer => self.select_visible = visible,
            Panel::ScorePanel => self.score_visible = visible,
            Panel::WinLoseMessage => self.message_visible = visible,
        }
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame and forget its sprites.
pub fn present<W: Write>(out: &mut W, view: &mut TerminalView) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_board(out)?;
    for &(sprite, x, y) in &view.sprites {
        draw_sprite(out, sprite, x, y)?;
    }
    view.sprites.clear();

    if view.score_visible {
        draw_hud(out, view)?;
    }
    if view.select_visible {
        draw_select_panel(out)?;
    }
    if view.message_visible {
        draw_end_panel(out, view)?;
    }
    draw_controls_hint(out)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, board_bottom() + 2))?;
    out.flush()?;
    Ok(())
}

fn board_bottom() -> u16 {
    BOARD_TOP + BOARD_ROWS as u16 * CELL_ROWS
}

fn board_width() -> u16 {
    BOARD_COLUMNS as u16 * CELL_COLS
}

/// Board row for a y coordinate, nearest cell.
fn cell_row(y: f64) -> Option<u16> {
    let row = ((y + CELL_HEIGHT / 2.0) / CELL_HEIGHT).floor();
    (0.0..BOARD_ROWS as f64).contains(&row).then(|| row as u16)
}

/// Terminal column for an x coordinate; enemies move smoothly between cells.
fn screen_col(x: f64) -> Option<u16> {
    let col = (x / CELL_WIDTH * CELL_COLS as f64).round();
    (0.0..board_width() as f64).contains(&col).then(|| BOARD_LEFT + col as u16)
}

// ── Board ─────────────────────────────────────────────────────────────────────

fn draw_board<W: Write>(out: &mut W) -> std::io::Result<()> {
    let width = board_width() as usize;
    for row in 0..BOARD_ROWS as u16 {
        let (color, fill) = match row {
            0 => (C_WATER, "~"),
            1..=3 => (C_ROAD, "·"),
            _ => (C_GRASS, "\""),
        };
        out.queue(style::SetForegroundColor(color))?;
        for line in 0..CELL_ROWS {
            out.queue(cursor::MoveTo(BOARD_LEFT, BOARD_TOP + row * CELL_ROWS + line))?;
            out.queue(Print(fill.repeat(width)))?;
        }
    }
    Ok(())
}

fn draw_sprite<W: Write>(out: &mut W, sprite: Sprite, x: f64, y: f64) -> std::io::Result<()> {
    let (Some(col), Some(row)) = (screen_col(x), cell_row(y)) else {
        return Ok(());
    };
    let (glyph, color) = match sprite {
        Sprite::Enemy => ("<##>", C_ENEMY),
        Sprite::Character(id) => (character_glyph(id), C_PLAYER),
        Sprite::Gem(GemKind::Low) => ("◆", C_GEM_LOW),
        Sprite::Gem(GemKind::Mid) => ("◆", C_GEM_MID),
        Sprite::Gem(GemKind::High) => ("⚷", C_GEM_HIGH),
    };
    // Clip at the right edge so a wrapping enemy doesn't spill past the board
    let room = (BOARD_LEFT + board_width()).saturating_sub(col) as usize;
    let visible: String = glyph.chars().take(room).collect();
    out.queue(cursor::MoveTo(col, BOARD_TOP + row * CELL_ROWS))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(visible))?;
    Ok(())
}

fn character_glyph(id: CharacterId) -> &'static str {
    match id {
        CharacterId::Princess => "♛",
        CharacterId::Boy => "☺",
        CharacterId::CatGirl => "ᓚ",
        CharacterId::HornGirl => "♆",
        CharacterId::PinkGirl => "♥",
    }
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &TerminalView) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(BOARD_LEFT, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", view.score)))?;

    out.queue(cursor::MoveTo(BOARD_LEFT + 14, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(format!("Level: {}", view.level)))?;

    let full = "♥".repeat(view.hearts as usize);
    let empty = "♡".repeat(STARTING_LIVES.saturating_sub(view.hearts) as usize);
    out.queue(cursor::MoveTo(BOARD_LEFT + 26, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(format!("{}{}", full, empty)))?;
    Ok(())
}

// ── Panels ────────────────────────────────────────────────────────────────────

fn draw_select_panel<W: Write>(out: &mut W) -> std::io::Result<()> {
    let top = BOARD_TOP + CELL_ROWS;
    out.queue(cursor::MoveTo(BOARD_LEFT + 2, top))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Select player:"))?;
    for (i, profile) in CHARACTERS.iter().enumerate() {
        out.queue(cursor::MoveTo(BOARD_LEFT + 2, top + 1 + i as u16))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("[{}] ", i + 1)))?;
        out.queue(style::SetForegroundColor(C_PLAYER))?;
        out.queue(Print(format!("{} {}", character_glyph(profile.id), profile.name)))?;
    }
    Ok(())
}

fn draw_end_panel<W: Write>(out: &mut W, view: &TerminalView) -> std::io::Result<()> {
    let top = BOARD_TOP + CELL_ROWS * 2;
    out.queue(cursor::MoveTo(BOARD_LEFT + 2, top))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&view.end_message))?;
    out.queue(cursor::MoveTo(BOARD_LEFT + 2, top + 2))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("R - Restart  Q - Quit"))?;
    Ok(())
}

// ── Controls hint (below the board) ───────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(BOARD_LEFT, board_bottom() + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←↑→↓ / WASD : Move   1-5 : Pick   Q : Quit"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_rows_map_to_distinct_cells() {
        // Player rows from the start tile up to the last row below the water
        let rows: Vec<u16> = [390.0, 305.0, 220.0, 135.0, 50.0]
            .iter()
            .filter_map(|&y| cell_row(y))
            .collect();
        assert_eq!(rows, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn enemy_lanes_land_on_road_rows() {
        for y in [60.0, 145.0, 230.0] {
            let row = cell_row(y).unwrap();
            assert!((1..=3).contains(&row), "lane y={} drew on row {}", y, row);
        }
    }

    #[test]
    fn offscreen_enemy_is_not_drawn() {
        assert_eq!(screen_col(-100.0), None);
        assert_eq!(screen_col(505.0), None);
        assert_eq!(screen_col(0.0), Some(BOARD_LEFT));
    }

    #[test]
    fn ui_notifications_update_hud_model() {
        let mut view = TerminalView::new();
        view.remove_life_indicator();
        view.remove_life_indicator();
        assert_eq!(view.hearts, 1);
        view.reset_life_indicators();
        assert_eq!(view.hearts, STARTING_LIVES);

        view.set_panel_visibility(Panel::SelectPlayer, false);
        view.set_panel_visibility(Panel::WinLoseMessage, true);
        assert!(!view.select_visible);
        assert!(view.message_visible);
    }

    #[test]
    fn present_consumes_collected_sprites() {
        let mut view = TerminalView::new();
        view.draw(Sprite::Enemy, 10.0, 60.0);
        let mut buf: Vec<u8> = Vec::new();
        present(&mut buf, &mut view).unwrap();
        assert!(view.sprites.is_empty());
        assert!(!buf.is_empty());
    }
}
