//! Output seams of the core.
//!
//! The core never draws or touches a UI directly; it calls these traits.
//! All calls are fire-and-forget and cannot fail.

use crate::entities::{Panel, Sprite};

pub trait RenderSink {
    fn draw(&mut self, sprite: Sprite, x: f64, y: f64);
}

pub trait UiSink {
    fn report_score(&mut self, score: i32);
    fn report_level(&mut self, level: u32);
    fn remove_life_indicator(&mut self);
    fn reset_life_indicators(&mut self);
    fn show_end_message(&mut self, text: &str);
    fn set_panel_visibility(&mut self, panel: Panel, visible: bool);
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn draw(&mut self, _sprite: Sprite, _x: f64, _y: f64) {}
}

impl UiSink for NullSink {
    fn report_score(&mut self, _score: i32) {}
    fn report_level(&mut self, _level: u32) {}
    fn remove_life_indicator(&mut self) {}
    fn reset_life_indicators(&mut self) {}
    fn show_end_message(&mut self, _text: &str) {}
    fn set_panel_visibility(&mut self, _panel: Panel, _visible: bool) {}
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiCall {
    Score(i32),
    Level(u32),
    RemoveLife,
    ResetLives,
    EndMessage(String),
    Panel(Panel, bool),
}

/// Keeps every call in order, for tests and replays.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub ui: Vec<UiCall>,
    pub draws: Vec<(Sprite, f64, f64)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn end_messages(&self) -> Vec<&str> {
        self.ui
            .iter()
            .filter_map(|c| match c {
                UiCall::EndMessage(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, call: &UiCall) -> usize {
        self.ui.iter().filter(|c| *c == call).count()
    }

    pub fn clear(&mut self) {
        self.ui.clear();
        self.draws.clear();
    }
}

impl RenderSink for RecordingSink {
    fn draw(&mut self, sprite: Sprite, x: f64, y: f64) {
        self.draws.push((sprite, x, y));
    }
}

impl UiSink for RecordingSink {
    fn report_score(&mut self, score: i32) {
        self.ui.push(UiCall::Score(score));
    }

    fn report_level(&mut self, level: u32) {
        self.ui.push(UiCall::Level(level));
    }

    fn remove_life_indicator(&mut self) {
        self.ui.push(UiCall::RemoveLife);
    }

    fn reset_life_indicators(&mut self) {
        self.ui.push(UiCall::ResetLives);
    }

    fn show_end_message(&mut self, text: &str) {
        self.ui.push(UiCall::EndMessage(text.to_string()));
    }

    fn set_panel_visibility(&mut self, panel: Panel, visible: bool) {
        self.ui.push(UiCall::Panel(panel, visible));
    }
}
