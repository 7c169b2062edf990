//! Stages of the journey and the rule that classifies progress.

use serde::{Deserialize, Serialize};

use super::config::ProgressConfig;
use super::error::ProgressError;

/// Visual/narrative phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Up to the first threshold (33% by default).
    Initial,
    /// Between the two thresholds.
    Mid,
    /// Past the second threshold, short of the target.
    Final,
    /// Target reached. Terminal.
    Conquered,
    /// Player gave up. Terminal.
    GaveUp,
}

impl Stage {
    /// All five stages, in progression order.
    pub const ALL: [Stage; 5] = [
        Stage::Initial,
        Stage::Mid,
        Stage::Final,
        Stage::Conquered,
        Stage::GaveUp,
    ];

    /// Conquered and GaveUp accept no further clicks.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Stage::Conquered | Stage::GaveUp)
    }

    /// Position along the click progression.
    ///
    /// `GaveUp` is off the progression and has no ordinal.
    #[must_use]
    pub const fn ordinal(self) -> Option<u8> {
        match self {
            Stage::Initial => Some(0),
            Stage::Mid => Some(1),
            Stage::Final => Some(2),
            Stage::Conquered => Some(3),
            Stage::GaveUp => None,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Initial => "INITIAL",
            Stage::Mid => "MID",
            Stage::Final => "FINAL",
            Stage::Conquered => "CONQUERED",
            Stage::GaveUp => "GAVE_UP",
        };
        f.write_str(name)
    }
}

/// Classify progress into a stage.
///
/// Reaching the target always wins. Below it, `p = 100 * clicks / required`
/// is compared against the thresholds as `100 * clicks <= t * required`,
/// which is exact for every integer input.
///
/// Fails only for `required_clicks == 0`.
pub fn classify(
    clicks: u32,
    required_clicks: u32,
    config: &ProgressConfig,
) -> Result<Stage, ProgressError> {
    if required_clicks == 0 {
        return Err(ProgressError::InvalidConfiguration(
            "required_clicks must be at least 1".to_string(),
        ));
    }

    if clicks >= required_clicks {
        return Ok(Stage::Conquered);
    }

    let scaled = u64::from(clicks) * 100;
    let required = u64::from(required_clicks);

    let stage = if scaled <= u64::from(config.initial_max_percent) * required {
        Stage::Initial
    } else if scaled <= u64::from(config.mid_max_percent) * required {
        Stage::Mid
    } else {
        Stage::Final
    };
    Ok(stage)
}
