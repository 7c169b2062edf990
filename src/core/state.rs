//! Game state: the `(clicks, required_clicks, stage)` triple.
//!
//! Fields are private so the stage can only change through the rules in
//! `rules::engine`. The triple is exactly what a rendering host persists
//! across a suspend. Deserializing checks everything that holds for any
//! configuration; `validate` adds the threshold-dependent stage check.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::config::ProgressConfig;
use super::error::ProgressError;
use super::stage::{classify, Stage};

/// State of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GameStateParts")]
pub struct GameState {
    clicks: u32,
    required_clicks: u32,
    stage: Stage,
}

/// Unchecked wire form of `GameState`.
#[derive(Deserialize)]
struct GameStateParts {
    clicks: u32,
    required_clicks: u32,
    stage: Stage,
}

impl TryFrom<GameStateParts> for GameState {
    type Error = ProgressError;

    fn try_from(parts: GameStateParts) -> Result<Self, Self::Error> {
        let state = Self {
            clicks: parts.clicks,
            required_clicks: parts.required_clicks,
            stage: parts.stage,
        };
        state.check_invariants()?;
        Ok(state)
    }
}

impl GameState {
    /// Start a game with a fixed target.
    ///
    /// A target of zero is rejected with `InvalidConfiguration`.
    pub fn new(required_clicks: u32) -> Result<Self, ProgressError> {
        let required = NonZeroU32::new(required_clicks).ok_or_else(|| {
            ProgressError::InvalidConfiguration("required_clicks must be at least 1".to_string())
        })?;
        Ok(Self::start(required))
    }

    /// Start a game with a target already known to be non-zero.
    pub(crate) fn start(required_clicks: NonZeroU32) -> Self {
        Self {
            clicks: 0,
            required_clicks: required_clicks.get(),
            stage: Stage::Initial,
        }
    }

    /// Rebuild a persisted triple, checking it against the rules.
    pub fn from_parts(
        clicks: u32,
        required_clicks: u32,
        stage: Stage,
        config: &ProgressConfig,
    ) -> Result<Self, ProgressError> {
        let state = Self {
            clicks,
            required_clicks,
            stage,
        };
        state.validate(config)?;
        Ok(state)
    }

    /// Cumulative clicks this game.
    #[must_use]
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Target for this game.
    #[must_use]
    pub fn required_clicks(&self) -> u32 {
        self.required_clicks
    }

    /// Current stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Whether the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.stage.is_terminal()
    }

    /// Progress in percent, capped at 100.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        let p = 100.0 * f64::from(self.clicks) / f64::from(self.required_clicks);
        p.min(100.0)
    }

    /// The "clicks/required" readout.
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.clicks, self.required_clicks)
    }

    /// Check that the stage is one the rules could have produced.
    ///
    /// `GaveUp` is accepted for any count short of the target. Every other
    /// stage must match `classify(clicks, required_clicks)`.
    pub fn validate(&self, config: &ProgressConfig) -> Result<(), ProgressError> {
        self.check_invariants()?;
        let derived = classify(self.clicks, self.required_clicks, config)?;
        let consistent = match self.stage {
            Stage::GaveUp => derived != Stage::Conquered,
            stage => stage == derived,
        };
        if consistent {
            Ok(())
        } else {
            Err(ProgressError::InconsistentState {
                clicks: self.clicks,
                required_clicks: self.required_clicks,
                stage: self.stage,
            })
        }
    }

    /// Target of at least one, and Conquered exactly when it is reached.
    fn check_invariants(&self) -> Result<(), ProgressError> {
        if self.required_clicks == 0 {
            return Err(ProgressError::InvalidConfiguration(
                "required_clicks must be at least 1".to_string(),
            ));
        }
        let reached = self.clicks >= self.required_clicks;
        if reached != (self.stage == Stage::Conquered) {
            return Err(ProgressError::InconsistentState {
                clicks: self.clicks,
                required_clicks: self.required_clicks,
                stage: self.stage,
            });
        }
        Ok(())
    }

    pub(crate) fn set_clicks(&mut self, clicks: u32) {
        self.clicks = clicks;
    }

    pub(crate) fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(12).unwrap();
        assert_eq!(state.clicks(), 0);
        assert_eq!(state.required_clicks(), 12);
        assert_eq!(state.stage(), Stage::Initial);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_zero_target_rejected() {
        assert!(matches!(
            GameState::new(0),
            Err(ProgressError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_progress_label_and_percentage() {
        let config = ProgressConfig::default();
        let state = GameState::from_parts(5, 20, Stage::Initial, &config).unwrap();
        assert_eq!(state.progress_label(), "5/20");
        assert!((state.percentage() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_from_parts_accepts_consistent() {
        let config = ProgressConfig::default();
        assert!(GameState::from_parts(4, 10, Stage::Mid, &config).is_ok());
        assert!(GameState::from_parts(10, 10, Stage::Conquered, &config).is_ok());
        assert!(GameState::from_parts(4, 10, Stage::GaveUp, &config).is_ok());
        assert!(GameState::from_parts(0, 10, Stage::GaveUp, &config).is_ok());
    }

    #[test]
    fn test_from_parts_rejects_inconsistent() {
        let config = ProgressConfig::default();

        let err = GameState::from_parts(4, 10, Stage::Final, &config).unwrap_err();
        assert_eq!(
            err,
            ProgressError::InconsistentState {
                clicks: 4,
                required_clicks: 10,
                stage: Stage::Final,
            }
        );

        // Can't have given up on a game that was already won
        assert!(GameState::from_parts(10, 10, Stage::GaveUp, &config).is_err());
        assert!(GameState::from_parts(3, 10, Stage::Conquered, &config).is_err());
    }

    #[test]
    fn test_from_parts_rejects_zero_target() {
        let config = ProgressConfig::default();
        assert!(matches!(
            GameState::from_parts(0, 0, Stage::Initial, &config),
            Err(ProgressError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ProgressConfig::default();
        let state = GameState::from_parts(7, 10, Stage::Final, &config).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, back);
        assert!(back.validate(&config).is_ok());
    }

    #[test]
    fn test_deserialize_rejects_zero_target() {
        let result: Result<GameState, _> =
            serde_json::from_str(r#"{"clicks":0,"required_clicks":0,"stage":"Initial"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("required_clicks must be at least 1"));
    }

    #[test]
    fn test_deserialize_rejects_conquered_mismatch() {
        // Won without reaching the target
        let early: Result<GameState, _> =
            serde_json::from_str(r#"{"clicks":4,"required_clicks":10,"stage":"Conquered"}"#);
        assert!(early.is_err());

        // Reached the target but not marked as won
        for stage in ["Final", "GaveUp"] {
            let json = format!(r#"{{"clicks":10,"required_clicks":10,"stage":"{stage}"}}"#);
            let late: Result<GameState, _> = serde_json::from_str(&json);
            assert!(late.is_err(), "{stage} at the target should be rejected");
        }
    }

    #[test]
    fn test_deserialize_leaves_threshold_check_to_validate() {
        // 4/10 is Mid under the default thresholds, but that depends on config
        let state: GameState =
            serde_json::from_str(r#"{"clicks":4,"required_clicks":10,"stage":"Final"}"#).unwrap();
        assert!(matches!(
            state.validate(&ProgressConfig::default()),
            Err(ProgressError::InconsistentState { .. })
        ));
        assert!(state.validate(&ProgressConfig::new().with_thresholds(10, 30)).is_ok());
    }
}
