//! Services: battle coordination and the trigger entry points.

pub mod battle;
pub mod triggers;

pub use battle::{BattleContext, BattleCoordinator, Phase};
pub use triggers::{on_battle_created, on_hand_created, LifecycleReport};
