#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::BattlePolicy;
pub use domain::{judge, Hand, Outcome, Tally};
pub use error::AppError;
pub use errors::BattleError;
pub use repos::{BattleKey, BattleStore};
pub use services::{on_battle_created, on_hand_created, BattleContext, BattleCoordinator};
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
