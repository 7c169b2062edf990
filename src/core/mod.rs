//! Core types: stages, state, intents, RNG, configuration, errors.
//!
//! Nothing here knows how a game is rendered. The rules that move a
//! `GameState` between stages live in `rules`.

pub mod rng;
pub mod config;
pub mod error;
pub mod stage;
pub mod state;
pub mod intent;

pub use rng::{GameRng, GameRngState};
pub use config::{ProgressConfig, MIN_REQUIRED_CLICKS};
pub use error::ProgressError;
pub use stage::{classify, Stage};
pub use state::GameState;
pub use intent::Intent;
