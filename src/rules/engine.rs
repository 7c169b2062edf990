//! Rules trait for progress models.
//!
//! Implementations define:
//! - How a fresh game is drawn
//! - How a click and a give-up move the state
//!
//! Everything else (reset, intent dispatch, terminal detection, which
//! intents to offer) is derived from those in provided methods.

use crate::core::{GameRng, GameState, Intent, ProgressConfig, Stage};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The target was reached.
    Conquered,
    /// The player gave up first.
    GaveUp,
}

/// Rules trait.
///
/// ## Implementation Notes
///
/// - `new_game`: the only place randomness enters; draw from `rng`
/// - `apply_click` / `apply_give_up`: must return terminal states unchanged
/// - All methods are pure in `state`; callers replace their copy with the
///   returned one
pub trait ProgressRules {
    /// Get the model configuration.
    fn config(&self) -> &ProgressConfig;

    /// Draw a fresh game: zero clicks, `Stage::Initial`.
    fn new_game(&self, rng: &mut GameRng) -> GameState;

    /// Count one click and reclassify.
    fn apply_click(&self, state: GameState) -> GameState;

    /// Abandon the game, keeping the click count.
    fn apply_give_up(&self, state: GameState) -> GameState;

    // === Provided Methods ===

    /// Start over. Allowed from any stage.
    fn reset(&self, _state: GameState, rng: &mut GameRng) -> GameState {
        self.new_game(rng)
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(outcome)` if it has ended, `None` while it continues.
    fn is_terminal(&self, state: &GameState) -> Option<Outcome> {
        match state.stage() {
            Stage::Conquered => Some(Outcome::Conquered),
            Stage::GaveUp => Some(Outcome::GaveUp),
            Stage::Initial | Stage::Mid | Stage::Final => None,
        }
    }

    /// Intents the rendering layer should offer for this state.
    fn legal_intents(&self, state: &GameState) -> Vec<Intent> {
        if state.is_terminal() {
            Intent::TERMINAL.to_vec()
        } else {
            Intent::ACTIVE.to_vec()
        }
    }

    /// Apply any intent.
    ///
    /// `End` never changes the game; dismissing the prompt is a concern of
    /// whoever is showing it.
    fn apply_intent(&self, state: GameState, intent: Intent, rng: &mut GameRng) -> GameState {
        match intent {
            Intent::Click => self.apply_click(state),
            Intent::GiveUp => self.apply_give_up(state),
            Intent::Reset => self.reset(state, rng),
            Intent::End => state,
        }
    }
}
