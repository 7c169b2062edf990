//! Canonical progress model.

use std::num::NonZeroU32;

use tracing::{debug, info, warn};

use crate::core::{classify, GameRng, GameState, ProgressConfig, ProgressError, Stage};
use crate::rules::ProgressRules;

/// The click-to-conquer journey.
///
/// Holds only a validated configuration; the state and the RNG belong to
/// the caller.
#[derive(Clone, Debug, Default)]
pub struct ProgressModel {
    config: ProgressConfig,
}

impl ProgressModel {
    /// Create a model, validating the configuration once.
    pub fn new(config: ProgressConfig) -> Result<Self, ProgressError> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "rejected progress configuration");
            return Err(err);
        }
        Ok(Self { config })
    }

    /// Classify a count against this model's thresholds.
    pub fn classify(&self, clicks: u32, required_clicks: u32) -> Result<Stage, ProgressError> {
        classify(clicks, required_clicks, &self.config)
    }
}

impl ProgressRules for ProgressModel {
    fn config(&self) -> &ProgressConfig {
        &self.config
    }

    fn new_game(&self, rng: &mut GameRng) -> GameState {
        let drawn = rng.gen_range_inclusive(self.config.click_range());
        // validate() keeps the range above zero
        let required = NonZeroU32::new(drawn).unwrap_or(NonZeroU32::MIN);
        info!(required_clicks = required.get(), "new game");
        GameState::start(required)
    }

    fn apply_click(&self, state: GameState) -> GameState {
        if state.is_terminal() {
            return state;
        }

        let clicks = state.clicks().saturating_add(1);
        let stage = match self.classify(clicks, state.required_clicks()) {
            Ok(stage) => stage,
            Err(err) => {
                warn!(error = %err, "click ignored on invalid state");
                return state;
            }
        };

        let mut next = state;
        next.set_clicks(clicks);
        next.set_stage(stage);

        if stage == Stage::Conquered {
            info!(clicks, "journey conquered");
        } else {
            debug!(clicks, required_clicks = state.required_clicks(), %stage, "click");
        }
        next
    }

    fn apply_give_up(&self, state: GameState) -> GameState {
        if state.is_terminal() {
            return state;
        }

        info!(
            clicks = state.clicks(),
            required_clicks = state.required_clicks(),
            "gave up"
        );
        let mut next = state;
        next.set_stage(Stage::GaveUp);
        next
    }
}
