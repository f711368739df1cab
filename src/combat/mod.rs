//! Combat rules: which statistic counts this round, and how much it hurts.

pub mod damage;
pub mod mode;

pub use damage::DamageCalculator;
pub use mode::{select_mode, CombatMode};
