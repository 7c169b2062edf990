//! A single rendering session over one progress model.

use tracing::{debug, warn};

use crate::core::{GameRng, GameState, Intent, ProgressError};
use crate::rules::ProgressRules;

use super::frame::Frame;
use super::snapshot::SessionSnapshot;

/// Owns the model, the random source and the current game.
///
/// Intents are applied one at a time. The renderer reads `view()` after
/// each one and redraws.
#[derive(Clone, Debug)]
pub struct Session<R: ProgressRules> {
    rules: R,
    rng: GameRng,
    state: GameState,
    dismissed: bool,
}

impl<R: ProgressRules> Session<R> {
    /// Start a session with a freshly drawn game.
    pub fn new(rules: R, mut rng: GameRng) -> Self {
        let state = rules.new_game(&mut rng);
        Self {
            rules,
            rng,
            state,
            dismissed: false,
        }
    }

    /// The current game.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The rules this session plays by.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Whether the terminal prompt was dismissed with `End`.
    #[must_use]
    pub fn dismissed(&self) -> bool {
        self.dismissed
    }

    /// Apply one intent and return the new state.
    pub fn dispatch(&mut self, intent: Intent) -> &GameState {
        match intent {
            Intent::End => {
                if self.state.is_terminal() {
                    self.dismissed = true;
                }
            }
            Intent::Reset => {
                self.state = self.rules.reset(self.state, &mut self.rng);
                self.dismissed = false;
            }
            Intent::Click | Intent::GiveUp => {
                self.state = self.rules.apply_intent(self.state, intent, &mut self.rng);
            }
        }
        debug!(%intent, stage = %self.state.stage(), "dispatched");
        &self.state
    }

    /// Build the frame for the current state.
    #[must_use]
    pub fn view(&self) -> Frame {
        Frame::build(&self.state, self.rules.legal_intents(&self.state), self.dismissed)
    }

    /// Capture the session for suspend.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state,
            rng: self.rng.state(),
            dismissed: self.dismissed,
        }
    }

    /// Resume from a snapshot.
    ///
    /// An inconsistent snapshot is rejected and the current game is kept.
    pub fn restore(&mut self, snapshot: SessionSnapshot) -> Result<(), ProgressError> {
        if let Err(err) = snapshot.state.validate(self.rules.config()) {
            warn!(error = %err, "snapshot rejected, keeping current game");
            return Err(err);
        }
        self.state = snapshot.state;
        self.rng = GameRng::from_state(&snapshot.rng);
        self.dismissed = snapshot.dismissed && snapshot.state.is_terminal();
        Ok(())
    }

    /// Resume from encoded snapshot bytes.
    pub fn restore_bytes(&mut self, bytes: &[u8]) -> Result<(), ProgressError> {
        let snapshot = match SessionSnapshot::from_bytes(bytes) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "snapshot undecodable, keeping current game");
                return Err(err);
            }
        };
        self.restore(snapshot)
    }
}
