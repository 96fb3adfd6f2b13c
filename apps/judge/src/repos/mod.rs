//! Repository layer: the storage collaborator the coordinator talks to.

pub mod battles;
pub mod hands;
pub mod messages;

pub use battles::{BattleKey, BattleState, BattleStore};
pub use hands::{HandCreate, HandRecord};
pub use messages::{Announcement, AnnouncementCreate};
