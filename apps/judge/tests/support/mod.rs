// Shared helpers for judge integration tests.
#![allow(dead_code)]

pub mod sleeper;

use std::sync::Arc;

use janken_judge::adapters::MemoryBattleStore;
use janken_judge::config::BattlePolicy;
use janken_judge::domain::{Catalog, JaCatalog};
use janken_judge::repos::{BattleKey, BattleStore, HandCreate};
use janken_judge::services::BattleContext;

pub use sleeper::ScriptedSleeper;

/// Initialize test logging (idempotent).
pub fn init_logging() {
    judge_test_support::logging::init();
}

pub fn battle_key() -> BattleKey {
    BattleKey::new("room-1", "battle-1")
}

/// In-memory store, scripted sleeper and Japanese catalog wired together.
pub struct Harness {
    pub store: Arc<MemoryBattleStore>,
    pub sleeper: Arc<ScriptedSleeper>,
    pub catalog: Arc<dyn Catalog>,
    pub key: BattleKey,
}

impl Harness {
    pub fn new() -> Self {
        init_logging();
        let key = battle_key();
        let store = Arc::new(MemoryBattleStore::new());
        store.create_battle(&key);
        let sleeper = Arc::new(ScriptedSleeper::new(store.clone(), key.clone()));
        Self {
            store,
            sleeper,
            catalog: Arc::new(JaCatalog),
            key,
        }
    }

    pub fn context(&self) -> BattleContext {
        self.context_with(BattlePolicy::default())
    }

    pub fn context_with(&self, policy: BattlePolicy) -> BattleContext {
        BattleContext::new(
            self.store.clone(),
            self.sleeper.clone(),
            self.catalog.clone(),
            policy,
        )
    }

    /// Append hands directly, as participants would.
    pub async fn submit(&self, hands: &[(&str, &str)]) {
        for (author, hand) in hands {
            self.store
                .append_hand(&self.key, HandCreate::new(*author, *hand))
                .await
                .expect("append hand");
        }
    }

    pub fn bodies(&self) -> Vec<String> {
        self.store.message_bodies(&self.key)
    }

    /// Bodies after the start announcement.
    pub fn bodies_after_start(&self) -> Vec<String> {
        let bodies = self.bodies();
        assert_eq!(
            bodies.first().map(String::as_str),
            Some(self.catalog.battle_started().as_str()),
            "first announcement must be the start announcement"
        );
        bodies[1..].to_vec()
    }
}
