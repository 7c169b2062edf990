//! Progress model implementations.
//!
//! `ProgressModel` is the canonical journey:
//! - A target drawn uniformly from `1..=50` per game
//! - Initial up to 33%, Mid up to 66%, Final beyond, Conquered at 100%
//! - Give up at any point before the end; reset from anywhere

mod progress;

pub use progress::ProgressModel;
