use tracing::{info, warn};

use super::{BattleCoordinator, Phase};
use crate::errors::domain::{BattleError, LifecycleKind};
use crate::repos::BattleState;

impl BattleCoordinator {
    /// Mark the battle closed.
    ///
    /// Allowed once the wait timed out or the judgment is durable. A second
    /// call performs no write and reports `AlreadyClosed`.
    pub async fn close(&mut self) -> Result<(), BattleError> {
        match self.phase {
            Phase::TimedOut | Phase::Judged => {}
            Phase::Closed => {
                warn!(
                    room_id = %self.key.room_id,
                    battle_id = %self.key.battle_id,
                    "close called on a closed battle"
                );
                return Err(BattleError::lifecycle(
                    LifecycleKind::AlreadyClosed,
                    format!("battle {} already closed", self.key),
                ));
            }
            Phase::Waiting
            | Phase::QuorumReached
            | Phase::Indeterminate
            | Phase::Announcing => {
                return Err(BattleError::lifecycle(
                    LifecycleKind::CloseBeforeOutcome,
                    format!("close called in phase {:?}", self.phase),
                ));
            }
        }

        self.ctx
            .store
            .set_battle_state(&self.key, BattleState::Closed)
            .await?;
        self.phase = Phase::Closed;
        info!(
            room_id = %self.key.room_id,
            battle_id = %self.key.battle_id,
            "battle closed"
        );
        Ok(())
    }
}
