//! Display data derived from game state
//!
//! Nothing here feeds back into the rules. Front-ends either draw the
//! [`GameView`] themselves (the browser page gets it as JSON) or print its
//! text form.

use std::fmt;

use serde::Serialize;

use crate::settings::Settings;
use crate::sim::{GameState, GameStatus, Level, LevelCatalog, Pad};

pub const HINT_TEXT: &str = "Collect every fly and hop to the finish";

/// Colour class of a pad's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueTone {
    Positive,
    Negative,
    Neutral,
}

impl ValueTone {
    pub fn of(value: i32) -> Self {
        match value {
            v if v > 0 => ValueTone::Positive,
            v if v < 0 => ValueTone::Negative,
            _ => ValueTone::Neutral,
        }
    }
}

/// Value as printed on a pad: `+5`, `-2`, `0`
pub fn value_label(value: i32) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// One pad as the player sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PadView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub label: String,
    pub tone: ValueTone,
    pub is_current: bool,
    pub is_finish: bool,
    /// Sunk pads ignore clicks
    pub is_used: bool,
    /// Flies vanish once their pad has sunk
    pub shows_fly: bool,
    /// Frog is mid-hop towards this pad
    pub is_hopping_to: bool,
}

impl PadView {
    fn new(pad: &Pad, state: &GameState) -> Self {
        Self {
            id: pad.id,
            x: pad.pos.x,
            y: pad.pos.y,
            label: value_label(pad.value),
            tone: ValueTone::of(pad.value),
            is_current: pad.id == state.frog,
            is_finish: pad.id == state.finish,
            is_used: pad.used,
            shows_fly: pad.has_fly && !pad.used,
            is_hopping_to: state.hop.is_some_and(|h| h.to == pad.id),
        }
    }
}

/// Panel below the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Banner {
    /// Retry button plus an optional hint
    Playing { hint: Option<String> },
    /// Victory panel; `action` labels the advance button
    Won { score: i32, action: String },
    /// Frog drowned; only retry is offered
    Lost,
}

/// Everything a front-end needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameView {
    pub title: String,
    /// 1-based level number
    pub level_number: usize,
    pub level_count: usize,
    pub score: i32,
    pub flies_collected: u32,
    pub total_flies: u32,
    pub status: GameStatus,
    pub pads: Vec<PadView>,
    pub banner: Banner,
}

impl GameView {
    pub fn new(
        state: &GameState,
        level: &Level,
        catalog: &LevelCatalog,
        settings: &Settings,
    ) -> Self {
        let banner = match state.status {
            GameStatus::Playing => Banner::Playing {
                hint: settings.show_hints.then(|| HINT_TEXT.to_string()),
            },
            GameStatus::Won => Banner::Won {
                score: state.score,
                action: if catalog.is_last(state.level_index) {
                    "Play again".to_string()
                } else {
                    "Next level".to_string()
                },
            },
            GameStatus::Lost => Banner::Lost,
        };

        Self {
            title: level.title.clone(),
            level_number: state.level_index + 1,
            level_count: catalog.len(),
            score: state.score,
            flies_collected: state.flies_collected,
            total_flies: state.total_flies,
            status: state.status,
            pads: state.pads.iter().map(|p| PadView::new(p, state)).collect(),
            banner,
        }
    }

    /// JSON for the browser page
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for GameView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frog Hop - {}", self.title)?;
        writeln!(
            f,
            "Score: {}   Flies: {}/{}",
            self.score, self.flies_collected, self.total_flies
        )?;

        for pad in &self.pads {
            let marker = if pad.is_current {
                "[frog]"
            } else if pad.is_used {
                "(sunk)"
            } else {
                ""
            };
            write!(
                f,
                "  pad {:>2} ({:>3},{:>3}) {:>3} {}",
                pad.id, pad.x, pad.y, pad.label, marker
            )?;
            if pad.shows_fly {
                write!(f, " fly")?;
            }
            if pad.is_finish {
                write!(f, " FINISH")?;
            }
            writeln!(f)?;
        }

        match &self.banner {
            Banner::Playing { hint } => {
                if let Some(hint) = hint {
                    writeln!(f, "{}", hint)?;
                }
            }
            Banner::Won { score, action } => {
                writeln!(f, "Victory! Final score: {} points", score)?;
                writeln!(f, "Type `next` - {}", action)?;
            }
            Banner::Lost => {
                writeln!(f, "The frog drowned! The score went negative.")?;
                writeln!(f, "Type `retry` to try again")?;
            }
        }
        Ok(())
    }
}
