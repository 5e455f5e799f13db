//! Game state and runtime pad types
//!
//! Everything that changes during a level attempt lives here. Level data is
//! copied in on (re)start so the catalog is never mutated.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{Level, LilyPad};

/// Outcome of the current level attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Frog is still hopping
    Playing,
    /// Finish reached with every fly collected
    Won,
    /// Score dropped below zero
    Lost,
}

/// A lily pad as it exists during play
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pad {
    pub id: u32,
    pub pos: Vec2,
    pub value: i32,
    pub has_fly: bool,
    /// Set once the frog has hopped off this pad; a used pad has sunk
    pub used: bool,
}

impl From<&LilyPad> for Pad {
    fn from(pad: &LilyPad) -> Self {
        Self {
            id: pad.id,
            pos: pad.pos,
            value: pad.value,
            has_fly: pad.has_fly,
            used: false,
        }
    }
}

/// A hop that has been accepted but not yet landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HopInFlight {
    /// Pad being vacated
    pub from: u32,
    /// Pad the frog is hopping to
    pub to: u32,
    /// Identifies this hop; a landing with any other ticket is stale
    pub ticket: u64,
}

/// Complete state of one level attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Index into the level catalog
    pub level_index: usize,
    pub start: u32,
    pub finish: u32,
    /// Runtime pads in level order
    pub pads: Vec<Pad>,
    /// Pad the frog sits on
    pub frog: u32,
    pub score: i32,
    pub flies_collected: u32,
    pub total_flies: u32,
    pub status: GameStatus,
    /// Hop currently animating, if any
    pub hop: Option<HopInFlight>,
    /// Next hop ticket (survives resets so old tickets stay stale)
    next_ticket: u64,
}

impl GameState {
    /// Start a fresh attempt at `level`
    pub fn new(level: &Level, level_index: usize) -> Self {
        let mut state = Self {
            level_index,
            start: level.start,
            finish: level.finish,
            pads: Vec::with_capacity(level.pads.len()),
            frog: level.start,
            score: 0,
            flies_collected: 0,
            total_flies: 0,
            status: GameStatus::Playing,
            hop: None,
            next_ticket: 1,
        };
        state.reset(level, level_index);
        state
    }

    /// Put the frog back on the start pad with a clean slate
    pub fn reset(&mut self, level: &Level, level_index: usize) {
        self.level_index = level_index;
        self.start = level.start;
        self.finish = level.finish;
        self.pads.clear();
        self.pads.extend(level.pads.iter().map(Pad::from));
        self.frog = level.start;
        self.score = 0;
        self.flies_collected = 0;
        self.total_flies = level.total_flies();
        self.status = GameStatus::Playing;
        self.hop = None;
    }

    /// Allocate a ticket for a new hop
    pub fn next_hop_ticket(&mut self) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        ticket
    }

    pub fn pad(&self, id: u32) -> Option<&Pad> {
        self.pads.iter().find(|p| p.id == id)
    }

    pub fn pad_mut(&mut self, id: u32) -> Option<&mut Pad> {
        self.pads.iter_mut().find(|p| p.id == id)
    }

    /// Pad under the frog
    pub fn current_pad(&self) -> Option<&Pad> {
        self.pad(self.frog)
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// True once every fly in the level has been eaten
    #[inline]
    pub fn all_flies_collected(&self) -> bool {
        self.flies_collected == self.total_flies
    }
}
