//! # journey-clicker
//!
//! Progress model for a single-screen click journey: tap toward a
//! randomly drawn target, watch the stage image change as progress passes
//! each threshold, then play again or walk away.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Every transition is a function of
//!    `(clicks, required_clicks)`. The only randomness is the target draw,
//!    taken from an RNG the caller passes in.
//!
//! 2. **Terminal Means Terminal**: Conquered and GaveUp ignore clicks and
//!    give-ups. Only a reset leaves them.
//!
//! 3. **Validate Once**: Bad configuration and bad restored snapshots are
//!    rejected when built, never while tapping.
//!
//! ## Modules
//!
//! - `core`: Stage, state, intents, RNG, configuration, errors
//! - `rules`: `ProgressRules` trait and `Outcome`
//! - `model`: `ProgressModel`, the canonical rules
//! - `session`: A renderer-facing session with frames and snapshots
//!
//! ## Example
//!
//! ```
//! use journey_clicker::{GameRng, Intent, ProgressConfig, ProgressModel, Session, Stage};
//!
//! let config = ProgressConfig::new().with_click_range(3, 3);
//! let model = ProgressModel::new(config).unwrap();
//! let mut session = Session::new(model, GameRng::new(42));
//!
//! assert_eq!(session.dispatch(Intent::Click).stage(), Stage::Mid);
//! assert_eq!(session.dispatch(Intent::Click).stage(), Stage::Final);
//! assert_eq!(session.dispatch(Intent::Click).stage(), Stage::Conquered);
//! assert_eq!(session.dispatch(Intent::Reset).stage(), Stage::Initial);
//! ```

pub mod core;
pub mod rules;
pub mod model;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    classify, GameRng, GameRngState, GameState, Intent, ProgressConfig, ProgressError, Stage,
};

pub use crate::rules::{Outcome, ProgressRules};

pub use crate::model::ProgressModel;

pub use crate::session::{Frame, Session, SessionSnapshot, StageAsset};
