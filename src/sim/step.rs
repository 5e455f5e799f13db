//! Game state transitions
//!
//! Every change to a [`GameState`] goes through [`step`]. A jump is applied in
//! two phases: `RequestJump` validates and marks the hop as in flight, then
//! `LandJump` (sent by the session once the hop animation is done) commits it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::level::LevelCatalog;
use super::state::{GameState, GameStatus, HopInFlight};
use crate::{pad_distance, within_reach};

/// Input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player clicked a pad
    RequestJump { pad: u32 },
    /// Hop animation finished; commit the hop with this ticket
    LandJump { ticket: u64 },
    /// Retry the current level
    Reset,
    /// Move on after a win
    Advance,
}

/// Why a jump request was ignored
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum JumpRejection {
    #[error("the level is over ({0:?})")]
    NotPlaying(GameStatus),
    #[error("the frog is still hopping to pad {to}")]
    HopInFlight { to: u32 },
    #[error("pad {0} does not exist")]
    UnknownPad(u32),
    #[error("pad {0} has already sunk")]
    PadUsed(u32),
    #[error("the frog is already on pad {0}")]
    SamePad(u32),
    #[error("pad {pad} is {distance:.1} away, out of reach")]
    OutOfReach { pad: u32, distance: f32 },
}

/// What a single step did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Jump accepted; the landing is pending
    HopStarted(HopInFlight),
    /// Jump request ignored, state untouched
    JumpRejected(JumpRejection),
    /// Hop committed
    Landed { pad: u32, status: GameStatus },
    /// Level (re)started from its start pad
    LevelStarted { level_index: usize },
    /// Event did not apply (stale landing, advance before winning)
    Ignored,
}

/// Check whether the frog may hop to `target` right now
pub fn validate_jump(state: &GameState, target: u32) -> Result<(), JumpRejection> {
    if !state.is_playing() {
        return Err(JumpRejection::NotPlaying(state.status));
    }
    if let Some(hop) = state.hop {
        return Err(JumpRejection::HopInFlight { to: hop.to });
    }

    let pad = state.pad(target).ok_or(JumpRejection::UnknownPad(target))?;
    if pad.used {
        return Err(JumpRejection::PadUsed(target));
    }
    if target == state.frog {
        return Err(JumpRejection::SamePad(target));
    }

    let current = state
        .current_pad()
        .ok_or(JumpRejection::UnknownPad(state.frog))?;
    if !within_reach(current.pos, pad.pos) {
        return Err(JumpRejection::OutOfReach {
            pad: target,
            distance: pad_distance(current.pos, pad.pos),
        });
    }
    Ok(())
}

/// Apply one event to the state in place
pub fn step(state: &mut GameState, catalog: &LevelCatalog, event: GameEvent) -> StepOutcome {
    match event {
        GameEvent::RequestJump { pad } => request_jump(state, pad),
        GameEvent::LandJump { ticket } => land_jump(state, ticket),
        GameEvent::Reset => restart(state, catalog, state.level_index),
        GameEvent::Advance => {
            if state.status != GameStatus::Won {
                return StepOutcome::Ignored;
            }
            restart(state, catalog, catalog.next_index(state.level_index))
        }
    }
}

/// Pure form of [`step`]: consume a state, return the next one
pub fn transition(state: GameState, catalog: &LevelCatalog, event: GameEvent) -> GameState {
    let mut state = state;
    step(&mut state, catalog, event);
    state
}

pub(super) fn request_jump(state: &mut GameState, target: u32) -> StepOutcome {
    if let Err(rejection) = validate_jump(state, target) {
        log::debug!("Jump to pad {} rejected: {}", target, rejection);
        return StepOutcome::JumpRejected(rejection);
    }

    let hop = HopInFlight {
        from: state.frog,
        to: target,
        ticket: state.next_hop_ticket(),
    };
    state.hop = Some(hop);
    StepOutcome::HopStarted(hop)
}

pub(super) fn land_jump(state: &mut GameState, ticket: u64) -> StepOutcome {
    let Some(hop) = state.hop.filter(|h| h.ticket == ticket) else {
        log::debug!("Dropping stale landing (ticket {})", ticket);
        return StepOutcome::Ignored;
    };
    state.hop = None;

    let Some(target) = state.pad(hop.to).copied() else {
        return StepOutcome::Ignored;
    };

    if let Some(vacated) = state.pad_mut(hop.from) {
        vacated.used = true;
    }
    // Validated levels cannot overflow; unvalidated ones saturate
    state.score = state.score.saturating_add(target.value);
    if target.has_fly {
        state.flies_collected += 1;
    }
    state.frog = target.id;

    // Loss is checked before the win
    if state.score < 0 {
        state.status = GameStatus::Lost;
        log::info!("Frog sank on pad {} (score {})", target.id, state.score);
    } else if state.frog == state.finish && state.all_flies_collected() {
        state.status = GameStatus::Won;
        log::info!(
            "Level {} won with score {}",
            state.level_index + 1,
            state.score
        );
    }

    StepOutcome::Landed {
        pad: target.id,
        status: state.status,
    }
}

fn restart(state: &mut GameState, catalog: &LevelCatalog, level_index: usize) -> StepOutcome {
    let Some(level) = catalog.get(level_index) else {
        log::warn!("No level at index {}", level_index);
        return StepOutcome::Ignored;
    };
    state.reset(level, level_index);
    log::info!("Starting {}", level.title);
    StepOutcome::LevelStarted { level_index }
}
