pub mod db;
pub mod policy;

pub use policy::BattlePolicy;
