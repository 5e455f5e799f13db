//! Frog Hop - A lily pad hopping puzzle game
//!
//! Core modules:
//! - `sim`: Deterministic game rules (levels, state, jump validation, solver)
//! - `session`: Two-phase hop scheduling against a millisecond clock
//! - `view`: Display data derived from game state
//! - `settings`: Player preferences loaded from JSON
//! - `web`: Browser bindings (wasm32 only)

pub mod error;
pub mod session;
pub mod settings;
pub mod sim;
pub mod view;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{FrogHopError, LevelError, SettingsError};
pub use session::Session;
pub use settings::Settings;
pub use view::{Banner, GameView, PadView};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Maximum hop length between pad centres (inclusive)
    pub const REACH_DISTANCE: f32 = 150.0;
    /// Time the hop animation plays before the landing is committed
    pub const HOP_DELAY_MS: u32 = 600;
}

/// Straight-line distance between two pad centres
#[inline]
pub fn pad_distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Whether a hop between two pad centres is short enough to be legal
#[inline]
pub fn within_reach(a: Vec2, b: Vec2) -> bool {
    pad_distance(a, b) <= consts::REACH_DISTANCE
}
