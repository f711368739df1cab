//! Word analysis and validation.
//!
//! - `analyze`: structural statistics used by the damage formulas
//! - `validate`: structural legality of raw player input
//! - `UsedWords`: words already played in the match

pub mod analyzer;
pub mod used;
pub mod validator;

pub use analyzer::{analyze, letter_score, WordStats};
pub use used::UsedWords;
pub use validator::validate;
