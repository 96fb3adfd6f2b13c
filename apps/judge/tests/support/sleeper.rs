use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use janken_judge::adapters::MemoryBattleStore;
use janken_judge::infra::Sleeper;
use janken_judge::repos::{BattleKey, BattleStore, HandCreate};
use parking_lot::Mutex;

/// Sleeper that returns immediately and, on each call, appends the next
/// scripted batch of hands. Records how often and how long it was asked to
/// sleep, so round counts can be asserted.
pub struct ScriptedSleeper {
    store: Arc<MemoryBattleStore>,
    key: BattleKey,
    script: Mutex<VecDeque<Vec<HandCreate>>>,
    calls: AtomicUsize,
    durations: Mutex<Vec<Duration>>,
}

impl ScriptedSleeper {
    pub fn new(store: Arc<MemoryBattleStore>, key: BattleKey) -> Self {
        Self {
            store,
            key,
            script: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
            durations: Mutex::new(Vec::new()),
        }
    }

    /// Hands arriving during each successive round's sleep.
    pub fn script(&self, rounds: &[&[(&str, &str)]]) {
        let mut script = self.script.lock();
        for batch in rounds {
            script.push_back(
                batch
                    .iter()
                    .map(|(author, hand)| HandCreate::new(*author, *hand))
                    .collect(),
            );
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn durations(&self) -> Vec<Duration> {
        self.durations.lock().clone()
    }
}

#[async_trait]
impl Sleeper for ScriptedSleeper {
    async fn after(&self, duration: Duration) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.durations.lock().push(duration);
        let batch = self.script.lock().pop_front().unwrap_or_default();
        for hand in batch {
            self.store
                .append_hand(&self.key, hand)
                .await
                .expect("scripted append");
        }
    }
}
