//! Match flow: the engine loop and the presentation-layer seam.
//!
//! Front ends implement `Presenter` to show events and supply words;
//! `MatchEngine` does everything else.

mod engine;
mod presenter;

pub use engine::{submit_word, MatchEngine};
pub use presenter::{MatchEvent, Presenter};
