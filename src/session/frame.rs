//! What the rendering layer reads to draw one screen.

use crate::core::{GameState, Intent, Stage};

/// One of five distinct stage images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageAsset {
    Start,
    Midway,
    Final,
    Trophy,
    Quitter,
}

impl StageAsset {
    /// Image shown for a stage.
    #[must_use]
    pub const fn for_stage(stage: Stage) -> Self {
        match stage {
            Stage::Initial => StageAsset::Start,
            Stage::Mid => StageAsset::Midway,
            Stage::Final => StageAsset::Final,
            Stage::Conquered => StageAsset::Trophy,
            Stage::GaveUp => StageAsset::Quitter,
        }
    }

    /// Stable key a renderer can map to a resource.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            StageAsset::Start => "stage_start",
            StageAsset::Midway => "stage_midway",
            StageAsset::Final => "stage_final",
            StageAsset::Trophy => "stage_trophy",
            StageAsset::Quitter => "stage_quitter",
        }
    }
}

pub const CONQUERED_MESSAGE: &str = "Congratulations! You completed the journey.";
pub const GAVE_UP_MESSAGE: &str = "You gave up on the journey.";

/// A read-only view of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub stage: Stage,
    pub asset: StageAsset,
    /// "Click to progress: c / r" while the game is running.
    pub progress: Option<String>,
    /// Closing message once the game is over.
    pub message: Option<&'static str>,
    /// Intents to bind to buttons. Empty after the prompt is dismissed.
    pub intents: Vec<Intent>,
    pub dismissed: bool,
}

impl Frame {
    pub(crate) fn build(state: &GameState, intents: Vec<Intent>, dismissed: bool) -> Self {
        let stage = state.stage();
        let (progress, message) = match stage {
            Stage::Conquered => (None, Some(CONQUERED_MESSAGE)),
            Stage::GaveUp => (None, Some(GAVE_UP_MESSAGE)),
            Stage::Initial | Stage::Mid | Stage::Final => (
                Some(format!(
                    "Click to progress: {} / {}",
                    state.clicks(),
                    state.required_clicks()
                )),
                None,
            ),
        };

        Self {
            stage,
            asset: StageAsset::for_stage(stage),
            progress,
            message,
            intents: if dismissed { Vec::new() } else { intents },
            dismissed,
        }
    }
}
