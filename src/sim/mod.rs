//! Deterministic game rules
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - No clocks (the session decides when a hop lands)
//! - Stable iteration order (level pad order)
//! - No rendering or platform dependencies

pub mod level;
pub mod solve;
pub mod state;
pub mod step;

pub use level::{Level, LevelCatalog, LilyPad};
pub use solve::{SEARCH_BUDGET, Solution, solve, solve_level, solve_within};
pub use state::{GameState, GameStatus, HopInFlight, Pad};
pub use step::{GameEvent, JumpRejection, StepOutcome, step, transition, validate_jump};
