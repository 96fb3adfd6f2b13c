//! Battle identity, state and the storage trait.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::hands::{HandCreate, HandRecord};
use super::messages::{Announcement, AnnouncementCreate};
use crate::errors::domain::BattleError;

/// Identity of one battle inside one room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BattleKey {
    pub room_id: String,
    pub battle_id: String,
}

impl BattleKey {
    pub fn new(room_id: impl Into<String>, battle_id: impl Into<String>) -> Self {
        Self {
            room_id: room_id.into(),
            battle_id: battle_id.into(),
        }
    }
}

impl fmt::Display for BattleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rooms/{}/battles/{}", self.room_id, self.battle_id)
    }
}

/// Battle state. Moves from `Open` to `Closed` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattleState {
    Open,
    Closed,
}

impl BattleState {
    pub fn as_str(self) -> &'static str {
        match self {
            BattleState::Open => "open",
            BattleState::Closed => "closed",
        }
    }
}

impl FromStr for BattleState {
    type Err = BattleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(BattleState::Open),
            "closed" => Ok(BattleState::Closed),
            other => Err(BattleError::storage(format!(
                "unknown battle state in storage: {other}"
            ))),
        }
    }
}

/// Storage collaborator for battles, hands and judge announcements.
///
/// Hands are append-only: many participants may append concurrently under
/// the same battle and no existing record is ever updated. Every future
/// returned here completes only once the operation is durable.
#[async_trait]
pub trait BattleStore: Send + Sync {
    /// Number of hand records currently stored for the battle.
    async fn count_hands(&self, key: &BattleKey) -> Result<usize, BattleError>;

    /// All hand records for the battle, in storage iteration order.
    async fn list_hands(&self, key: &BattleKey) -> Result<Vec<HandRecord>, BattleError>;

    /// Append one announcement message.
    async fn append_message(
        &self,
        key: &BattleKey,
        message: AnnouncementCreate,
    ) -> Result<(), BattleError>;

    /// Update the battle's state field.
    async fn set_battle_state(&self, key: &BattleKey, state: BattleState)
        -> Result<(), BattleError>;

    /// Append a participant's hand record.
    async fn append_hand(&self, key: &BattleKey, hand: HandCreate) -> Result<(), BattleError>;

    /// Current state of the battle, `None` if no such battle is stored.
    async fn find_battle_state(&self, key: &BattleKey)
        -> Result<Option<BattleState>, BattleError>;

    /// Announcements for the battle ordered by server timestamp.
    async fn list_messages(&self, key: &BattleKey) -> Result<Vec<Announcement>, BattleError>;

    /// Cheap reachability check for health reporting.
    async fn ping(&self) -> Result<(), BattleError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_displays_as_document_path() {
        let key = BattleKey::new("room1", "b42");
        assert_eq!(key.to_string(), "rooms/room1/battles/b42");
    }

    #[test]
    fn state_round_trips_through_str() {
        for state in [BattleState::Open, BattleState::Closed] {
            assert_eq!(state.as_str().parse::<BattleState>(), Ok(state));
        }
        assert!("archived".parse::<BattleState>().is_err());
    }
}
