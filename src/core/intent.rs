//! User intents forwarded from the rendering layer.

use serde::{Deserialize, Serialize};

/// A discrete user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Tap the progress button.
    Click,
    /// Abandon the current game.
    GiveUp,
    /// Start over with a fresh target ("play again").
    Reset,
    /// Dismiss the terminal prompt without starting over.
    End,
}

impl Intent {
    /// Intents offered while a game is in progress.
    pub const ACTIVE: [Intent; 2] = [Intent::Click, Intent::GiveUp];

    /// Intents offered once a game is over.
    pub const TERMINAL: [Intent; 2] = [Intent::Reset, Intent::End];
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Intent::Click => "click",
            Intent::GiveUp => "give up",
            Intent::Reset => "play again",
            Intent::End => "end",
        };
        f.write_str(name)
    }
}
