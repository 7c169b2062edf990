//! Game configuration.
//!
//! `ProgressConfig` fixes the two numbers a game variant can tune:
//! - the inclusive range the target click count is drawn from
//! - the percentage thresholds separating Initial, Mid and Final
//!
//! `Default` is the canonical game: a target in `1..=50`, with stage
//! boundaries at 33% and 66%.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::ProgressError;

/// Smallest allowed target. A zero target has no defined percentage.
pub const MIN_REQUIRED_CLICKS: u32 = 1;

/// Configuration for a progress model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Lowest target that can be drawn (inclusive).
    pub min_required_clicks: u32,

    /// Highest target that can be drawn (inclusive).
    pub max_required_clicks: u32,

    /// Progress at or below this percentage is `Stage::Initial`.
    pub initial_max_percent: u32,

    /// Progress at or below this percentage (and above
    /// `initial_max_percent`) is `Stage::Mid`. Anything higher, short of
    /// the target, is `Stage::Final`.
    pub mid_max_percent: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            min_required_clicks: 1,
            max_required_clicks: 50,
            initial_max_percent: 33,
            mid_max_percent: 66,
        }
    }
}

impl ProgressConfig {
    /// Create the canonical configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive range the target is drawn from.
    #[must_use]
    pub fn with_click_range(mut self, min: u32, max: u32) -> Self {
        self.min_required_clicks = min;
        self.max_required_clicks = max;
        self
    }

    /// Set the Initial/Mid and Mid/Final thresholds, in percent.
    #[must_use]
    pub fn with_thresholds(mut self, initial_max: u32, mid_max: u32) -> Self {
        self.initial_max_percent = initial_max;
        self.mid_max_percent = mid_max;
        self
    }

    /// The draw range as a `RangeInclusive`.
    #[must_use]
    pub fn click_range(&self) -> RangeInclusive<u32> {
        self.min_required_clicks..=self.max_required_clicks
    }

    /// Check that every draw yields a usable target and that the stage
    /// bands are ordered.
    pub fn validate(&self) -> Result<(), ProgressError> {
        if self.min_required_clicks < MIN_REQUIRED_CLICKS {
            return Err(ProgressError::InvalidConfiguration(format!(
                "min_required_clicks must be at least {}, got {}",
                MIN_REQUIRED_CLICKS, self.min_required_clicks
            )));
        }
        if self.min_required_clicks > self.max_required_clicks {
            return Err(ProgressError::InvalidConfiguration(format!(
                "empty click range {}..={}",
                self.min_required_clicks, self.max_required_clicks
            )));
        }
        if self.initial_max_percent >= self.mid_max_percent || self.mid_max_percent >= 100 {
            return Err(ProgressError::InvalidConfiguration(format!(
                "thresholds must satisfy initial < mid < 100, got {} and {}",
                self.initial_max_percent, self.mid_max_percent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_canonical() {
        let config = ProgressConfig::default();
        assert_eq!(config.click_range(), 1..=50);
        assert_eq!(config.initial_max_percent, 33);
        assert_eq!(config.mid_max_percent, 66);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ProgressConfig::new()
            .with_click_range(5, 10)
            .with_thresholds(25, 75);

        assert_eq!(config.click_range(), 5..=10);
        assert_eq!(config.initial_max_percent, 25);
        assert_eq!(config.mid_max_percent, 75);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_minimum() {
        let config = ProgressConfig::new().with_click_range(0, 50);
        assert!(matches!(
            config.validate(),
            Err(ProgressError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_empty_range() {
        let config = ProgressConfig::new().with_click_range(20, 10);
        assert!(matches!(
            config.validate(),
            Err(ProgressError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rejects_unordered_thresholds() {
        for (initial, mid) in [(66, 33), (50, 50), (10, 100)] {
            let config = ProgressConfig::new().with_thresholds(initial, mid);
            assert!(config.validate().is_err(), "{initial}/{mid} should be rejected");
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = ProgressConfig::new().with_click_range(2, 8);
        let json = serde_json::to_string(&config).unwrap();
        let back: ProgressConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
