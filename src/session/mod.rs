//! Session driving a model on behalf of a renderer.
//!
//! - `Session`: owns model, RNG and current game; dispatches intents
//! - `Frame`: what to draw (stage image, readout, message, buttons)
//! - `SessionSnapshot`: suspend/resume, bincode-encoded

mod frame;
mod runner;
mod snapshot;

pub use frame::{Frame, StageAsset, CONQUERED_MESSAGE, GAVE_UP_MESSAGE};
pub use runner::Session;
pub use snapshot::SessionSnapshot;
