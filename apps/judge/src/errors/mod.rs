//! Error handling for the janken judge.

pub mod domain;

pub use domain::{BattleError, LifecycleKind};
