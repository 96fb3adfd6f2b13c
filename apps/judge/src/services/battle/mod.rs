//! Battle coordination - owns the lifecycle of one battle instance.
//!
//! One coordinator drives one battle: start announcement, bounded wait for
//! submissions, judgment, close. Methods that advance the lifecycle take
//! `&mut self`, so a wait can never overlap a close on the same instance.

mod judging;
mod lifecycle;
mod quorum;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::BattlePolicy;
use crate::domain::Catalog;
use crate::errors::domain::BattleError;
use crate::infra::Sleeper;
use crate::repos::{AnnouncementCreate, BattleKey, BattleStore};

pub use judging::{tabulate, Tabulation};

/// Collaborators shared by every coordinator. Cheap to clone.
#[derive(Clone)]
pub struct BattleContext {
    pub store: Arc<dyn BattleStore>,
    pub sleeper: Arc<dyn Sleeper>,
    pub catalog: Arc<dyn Catalog>,
    pub policy: BattlePolicy,
}

impl BattleContext {
    pub fn new(
        store: Arc<dyn BattleStore>,
        sleeper: Arc<dyn Sleeper>,
        catalog: Arc<dyn Catalog>,
        policy: BattlePolicy,
    ) -> Self {
        Self {
            store,
            sleeper,
            catalog,
            policy,
        }
    }
}

impl fmt::Debug for BattleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BattleContext")
            .field("policy", &self.policy)
            .field("display_name", &self.catalog.display_name())
            .finish_non_exhaustive()
    }
}

/// Where a coordinator is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for quorum (or not started waiting yet)
    Waiting,
    QuorumReached,
    TimedOut,
    /// The final round's count could not be read; the wait cannot be retried
    Indeterminate,
    /// Judgment announcements were started but not all are durable
    Announcing,
    /// Judgment announcements are durable
    Judged,
    Closed,
}

pub struct BattleCoordinator {
    ctx: BattleContext,
    key: BattleKey,
    phase: Phase,
}

impl BattleCoordinator {
    /// Build a coordinator without any side effect.
    pub fn new(ctx: BattleContext, key: BattleKey) -> Self {
        Self {
            ctx,
            key,
            phase: Phase::Waiting,
        }
    }

    /// Build a coordinator and emit the start announcement.
    ///
    /// A failed start announcement is logged and does not prevent the
    /// lifecycle from running.
    pub async fn open(ctx: BattleContext, key: BattleKey) -> Self {
        let battle = Self::new(ctx, key);
        battle
            .announce_best_effort(battle.ctx.catalog.battle_started(), "start")
            .await;
        battle
    }

    pub fn key(&self) -> &BattleKey {
        &self.key
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn policy(&self) -> &BattlePolicy {
        &self.ctx.policy
    }

    /// Append one judge announcement. Completion means the message is durable.
    pub async fn announce(&self, body: String) -> Result<(), BattleError> {
        let catalog = &self.ctx.catalog;
        let message = AnnouncementCreate {
            sender_kind: catalog.sender_kind().to_string(),
            display_name: catalog.display_name().to_string(),
            body,
        };
        debug!(
            room_id = %self.key.room_id,
            battle_id = %self.key.battle_id,
            body = %message.body,
            "announce"
        );
        self.ctx.store.append_message(&self.key, message).await
    }

    /// Announce that `author` submitted a hand. Used by the hand trigger only.
    pub async fn announce_submission(&self, author: &str) -> Result<(), BattleError> {
        self.announce(self.ctx.catalog.hand_submitted(author)).await
    }

    /// Announce that the battle timed out without quorum (best effort).
    pub async fn announce_timeout(&self) {
        self.announce_best_effort(self.ctx.catalog.timed_out(), "timeout")
            .await;
    }

    /// Announcements outside judging must not abort the lifecycle.
    async fn announce_best_effort(&self, body: String, what: &'static str) {
        if let Err(err) = self.announce(body).await {
            warn!(
                room_id = %self.key.room_id,
                battle_id = %self.key.battle_id,
                announcement = what,
                error = %err,
                "announcement not delivered"
            );
        }
    }
}
