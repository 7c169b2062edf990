//! Rules trait for progress models.
//!
//! Models implement `ProgressRules` to define:
//! - How the target is drawn
//! - How clicks and give-ups change state
//!
//! Sessions and renderers call into `ProgressRules` and never classify
//! progress themselves.

pub mod engine;

pub use engine::{Outcome, ProgressRules};
