//! Text layout for the HUD and overlays
//!
//! Pure functions so the layout can be tested without a canvas.

use game_core::{Message, Phase, Tally};
use glam::IVec2;

pub const HUD_FONT: &str = "14px sans-serif";
pub const BANNER_FONT: &str = "bold 32px sans-serif";

/// A line of text at a canvas position (baseline-left)
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl TextLine {
    fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// Score, strikes and fouls in the top-left corner
pub fn tally_lines(tally: &Tally) -> Vec<TextLine> {
    vec![
        TextLine::new(format!("Score: {}", tally.score), 10.0, 20.0),
        TextLine::new(format!("Strikes: {}", tally.strikes), 10.0, 40.0),
        TextLine::new(format!("Fouls: {}", tally.fouls), 10.0, 60.0),
    ]
}

pub fn start_lines(arena: IVec2) -> Vec<TextLine> {
    let (cx, cy) = (arena.x as f64 / 2.0, arena.y as f64 / 2.0);
    vec![TextLine::new("Click to start", cx - 45.0, cy)]
}

pub fn game_over_lines(arena: IVec2) -> Vec<TextLine> {
    let (cx, cy) = (arena.x as f64 / 2.0, arena.y as f64 / 2.0);
    vec![
        TextLine::new("Game Over", cx - 50.0, cy),
        TextLine::new("Press F5 to Restart", cx - 80.0, cy + 20.0),
    ]
}

/// Overlay lines for the phase, drawn on top of the playfield
pub fn overlay_lines(phase: Phase, arena: IVec2) -> Vec<TextLine> {
    match phase {
        Phase::Start => start_lines(arena),
        Phase::Playing => Vec::new(),
        Phase::GameOver => game_over_lines(arena),
    }
}

/// Feedback banner with its opacity in [0, 1], if one is showing
pub fn message_banner(message: &Message, arena: IVec2) -> Option<(TextLine, f64)> {
    if !message.is_visible() {
        return None;
    }
    // Rough centering: ~18px per glyph at the banner font size
    let width = message.text.chars().count() as f64 * 18.0;
    let line = TextLine::new(
        message.text.clone(),
        (arena.x as f64 - width) / 2.0,
        arena.y as f64 / 3.0,
    );
    Some((line, message.alpha as f64 / 255.0))
}
