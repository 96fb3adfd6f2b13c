//! Storage adapters implementing `repos::BattleStore`.

pub mod battles_sea;
pub mod memory;

pub use battles_sea::BattleStoreSea;
pub use memory::MemoryBattleStore;
