//! In-memory `BattleStore`, used by the dev server and by tests.
//!
//! Supports simple fault injection so lifecycle error paths can be driven
//! deterministically.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use time::OffsetDateTime;
use tracing::debug;

use crate::errors::domain::BattleError;
use crate::repos::{
    Announcement, AnnouncementCreate, BattleKey, BattleState, BattleStore, HandCreate, HandRecord,
};

#[derive(Debug)]
struct BattleRecord {
    state: BattleState,
    hands: Vec<HandRecord>,
    messages: Vec<Announcement>,
}

impl Default for BattleRecord {
    fn default() -> Self {
        Self {
            state: BattleState::Open,
            hands: Vec::new(),
            messages: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
struct Faults {
    failing_reads: usize,
    failing_writes: usize,
    failing_bodies: Vec<String>,
}

#[derive(Debug, Default)]
pub struct MemoryBattleStore {
    battles: RwLock<HashMap<BattleKey, BattleRecord>>,
    faults: Mutex<Faults>,
}

impl MemoryBattleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an open battle. Writes also create battles lazily.
    pub fn create_battle(&self, key: &BattleKey) {
        self.battles.write().entry(key.clone()).or_default();
    }

    /// Make the next `n` hand reads (`count_hands`/`list_hands`) fail.
    pub fn fail_next_reads(&self, n: usize) {
        self.faults.lock().failing_reads = n;
    }

    /// Make the next `n` writes fail.
    pub fn fail_next_writes(&self, n: usize) {
        self.faults.lock().failing_writes = n;
    }

    /// Make every announcement whose body contains `fragment` fail.
    pub fn fail_messages_containing(&self, fragment: impl Into<String>) {
        self.faults.lock().failing_bodies.push(fragment.into());
    }

    /// Message bodies for the battle, in append order.
    pub fn message_bodies(&self, key: &BattleKey) -> Vec<String> {
        self.battles
            .read()
            .get(key)
            .map(|b| b.messages.iter().map(|m| m.body.clone()).collect())
            .unwrap_or_default()
    }

    pub fn state_of(&self, key: &BattleKey) -> Option<BattleState> {
        self.battles.read().get(key).map(|b| b.state)
    }

    fn take_read_fault(&self) -> Result<(), BattleError> {
        let mut faults = self.faults.lock();
        if faults.failing_reads > 0 {
            faults.failing_reads -= 1;
            return Err(BattleError::storage("injected read failure"));
        }
        Ok(())
    }

    fn take_write_fault(&self, body: Option<&str>) -> Result<(), BattleError> {
        let mut faults = self.faults.lock();
        if faults.failing_writes > 0 {
            faults.failing_writes -= 1;
            return Err(BattleError::storage("injected write failure"));
        }
        if let Some(body) = body {
            if faults.failing_bodies.iter().any(|f| body.contains(f.as_str())) {
                return Err(BattleError::storage("injected message failure"));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl BattleStore for MemoryBattleStore {
    async fn count_hands(&self, key: &BattleKey) -> Result<usize, BattleError> {
        self.take_read_fault()?;
        Ok(self
            .battles
            .read()
            .get(key)
            .map(|b| b.hands.len())
            .unwrap_or(0))
    }

    async fn list_hands(&self, key: &BattleKey) -> Result<Vec<HandRecord>, BattleError> {
        self.take_read_fault()?;
        Ok(self
            .battles
            .read()
            .get(key)
            .map(|b| b.hands.clone())
            .unwrap_or_default())
    }

    async fn append_message(
        &self,
        key: &BattleKey,
        message: AnnouncementCreate,
    ) -> Result<(), BattleError> {
        self.take_write_fault(Some(&message.body))?;
        let announcement = Announcement {
            sender_kind: message.sender_kind,
            display_name: message.display_name,
            body: message.body,
            created_at: OffsetDateTime::now_utc(),
        };
        debug!(%key, body = %announcement.body, "memory store: message appended");
        self.battles
            .write()
            .entry(key.clone())
            .or_default()
            .messages
            .push(announcement);
        Ok(())
    }

    async fn set_battle_state(
        &self,
        key: &BattleKey,
        state: BattleState,
    ) -> Result<(), BattleError> {
        self.take_write_fault(None)?;
        self.battles.write().entry(key.clone()).or_default().state = state;
        Ok(())
    }

    async fn append_hand(&self, key: &BattleKey, hand: HandCreate) -> Result<(), BattleError> {
        self.take_write_fault(None)?;
        let record = HandRecord {
            author: hand.author,
            hand: hand.hand,
            submitted_at: Some(OffsetDateTime::now_utc()),
        };
        self.battles
            .write()
            .entry(key.clone())
            .or_default()
            .hands
            .push(record);
        Ok(())
    }

    async fn find_battle_state(
        &self,
        key: &BattleKey,
    ) -> Result<Option<BattleState>, BattleError> {
        Ok(self.state_of(key))
    }

    async fn list_messages(&self, key: &BattleKey) -> Result<Vec<Announcement>, BattleError> {
        Ok(self
            .battles
            .read()
            .get(key)
            .map(|b| b.messages.clone())
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), BattleError> {
        self.take_read_fault()
    }
}
