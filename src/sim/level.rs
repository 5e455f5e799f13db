//! Level definitions and the level catalog
//!
//! Levels are immutable records loaded once. Runtime pad state (`used`) lives
//! in [`super::state::Pad`], never here.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LevelError;

/// A lily pad as authored in the level data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LilyPad {
    pub id: u32,
    /// Pad centre in board units
    pub pos: Vec2,
    /// Points gained (or lost) by landing here
    pub value: i32,
    #[serde(default)]
    pub has_fly: bool,
}

impl LilyPad {
    pub const fn new(id: u32, x: f32, y: f32, value: i32, has_fly: bool) -> Self {
        Self {
            id,
            pos: Vec2::new(x, y),
            value,
            has_fly,
        }
    }
}

/// One puzzle: a set of pads with a start and a finish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: u32,
    pub title: String,
    pub start: u32,
    pub finish: u32,
    pub pads: Vec<LilyPad>,
}

impl Level {
    /// Look up a pad by id
    pub fn pad(&self, id: u32) -> Option<&LilyPad> {
        self.pads.iter().find(|p| p.id == id)
    }

    /// Number of flies that must be collected to win
    pub fn total_flies(&self) -> u32 {
        self.pads.iter().filter(|p| p.has_fly).count() as u32
    }

    /// Check that the level can be loaded into a game
    pub fn validate(&self) -> Result<(), LevelError> {
        let level = self.id;
        if self.pads.is_empty() {
            return Err(LevelError::NoPads { level });
        }

        let mut seen = HashSet::with_capacity(self.pads.len());
        for pad in &self.pads {
            if !seen.insert(pad.id) {
                return Err(LevelError::DuplicatePad { level, pad: pad.id });
            }
        }

        if !seen.contains(&self.start) {
            return Err(LevelError::MissingStart {
                level,
                pad: self.start,
            });
        }
        if !seen.contains(&self.finish) {
            return Err(LevelError::MissingFinish {
                level,
                pad: self.finish,
            });
        }
        if self.start == self.finish {
            return Err(LevelError::StartIsFinish {
                level,
                pad: self.start,
            });
        }

        // Each pad is landed on at most once, so this bounds any reachable score
        let swing: i64 = self.pads.iter().map(|p| i64::from(p.value).abs()).sum();
        if swing > i64::from(i32::MAX) {
            return Err(LevelError::ScoreOverflow { level });
        }
        Ok(())
    }
}

const LEVEL_1_PADS: &[LilyPad] = &[
    LilyPad::new(0, 50.0, 350.0, 0, false),
    LilyPad::new(1, 150.0, 300.0, 5, true),
    LilyPad::new(2, 250.0, 280.0, 3, false),
    LilyPad::new(3, 180.0, 200.0, -2, false),
    LilyPad::new(4, 300.0, 180.0, 4, true),
    LilyPad::new(5, 380.0, 250.0, 0, false),
];

const LEVEL_2_PADS: &[LilyPad] = &[
    LilyPad::new(0, 40.0, 350.0, 0, false),
    LilyPad::new(1, 120.0, 320.0, -3, false),
    LilyPad::new(2, 200.0, 300.0, 6, true),
    LilyPad::new(3, 150.0, 230.0, 4, false),
    LilyPad::new(4, 280.0, 240.0, -5, false),
    LilyPad::new(5, 230.0, 170.0, 7, true),
    LilyPad::new(6, 350.0, 200.0, 3, true),
    LilyPad::new(7, 390.0, 280.0, 0, false),
];

const LEVEL_3_PADS: &[LilyPad] = &[
    LilyPad::new(0, 50.0, 360.0, 0, false),
    LilyPad::new(1, 130.0, 330.0, -4, false),
    LilyPad::new(2, 100.0, 260.0, 8, true),
    LilyPad::new(3, 190.0, 290.0, 5, false),
    LilyPad::new(4, 260.0, 250.0, -6, false),
    LilyPad::new(5, 200.0, 180.0, 7, true),
    LilyPad::new(6, 310.0, 200.0, -3, false),
    LilyPad::new(7, 350.0, 140.0, 6, true),
    LilyPad::new(8, 400.0, 220.0, 4, false),
    LilyPad::new(9, 420.0, 300.0, 0, false),
];

/// Ordered, read-only list of levels
///
/// Deserialize through [`LevelCatalog::from_json`] so every level is validated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LevelCatalog {
    /// The three levels shipped with the game
    pub fn builtin() -> Self {
        let level = |id: u32, title: &str, finish: u32, pads: &[LilyPad]| Level {
            id,
            title: title.to_string(),
            start: 0,
            finish,
            pads: pads.to_vec(),
        };
        Self {
            levels: vec![
                level(1, "Level 1: First Jump", 5, LEVEL_1_PADS),
                level(2, "Level 2: Dangerous Waters", 7, LEVEL_2_PADS),
                level(3, "Level 3: Jump Master", 9, LEVEL_3_PADS),
            ],
        }
    }

    /// Build a catalog from levels, validating each one
    pub fn from_levels(levels: Vec<Level>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::EmptyCatalog);
        }
        for level in &levels {
            level.validate()?;
        }
        Ok(Self { levels })
    }

    /// Parse a JSON array of levels
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let levels: Vec<Level> = serde_json::from_str(json)?;
        Self::from_levels(levels)
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Opening level (a catalog is never empty)
    pub fn first(&self) -> &Level {
        &self.levels[0]
    }

    /// Level at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Whether `index` is the final level
    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.levels.len()
    }

    /// Index of the level after `index`, wrapping to the first
    pub fn next_index(&self, index: usize) -> usize {
        if self.is_last(index) { 0 } else { index + 1 }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}
