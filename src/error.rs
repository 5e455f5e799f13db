//! Error types for configuration loading
//!
//! Gameplay never fails: rejected jumps are plain values (see
//! [`crate::sim::JumpRejection`]). Only loading level data and settings can
//! go wrong.

use thiserror::Error;

/// A level definition that cannot be played
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("the level catalog is empty")]
    EmptyCatalog,
    #[error("level {level} has no lily pads")]
    NoPads { level: u32 },
    #[error("level {level} defines pad {pad} more than once")]
    DuplicatePad { level: u32, pad: u32 },
    #[error("level {level} starts on pad {pad}, which does not exist")]
    MissingStart { level: u32, pad: u32 },
    #[error("level {level} finishes on pad {pad}, which does not exist")]
    MissingFinish { level: u32, pad: u32 },
    #[error("level {level} starts and finishes on the same pad {pad}")]
    StartIsFinish { level: u32, pad: u32 },
    #[error("level {level} pad values can push the score past the supported range")]
    ScoreOverflow { level: u32 },
    #[error("level data is not valid JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for LevelError {
    fn from(err: serde_json::Error) -> Self {
        LevelError::Json(err.to_string())
    }
}

/// Settings that could not be read
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings are not valid JSON")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// Top-level error for front-ends
#[derive(Error, Debug)]
pub enum FrogHopError {
    #[error("There was a problem with the level data")]
    Level(#[from] LevelError),
    #[error("There was a problem with the settings")]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
