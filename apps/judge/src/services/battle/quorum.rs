use tracing::{debug, error, info, warn};

use super::{BattleCoordinator, Phase};
use crate::domain::DuplicatePolicy;
use crate::errors::domain::{BattleError, LifecycleKind};

impl BattleCoordinator {
    /// Bounded polling wait for quorum.
    ///
    /// Each round suspends for `round_duration`, then reads the submission
    /// count. Returns `Ok(true)` as soon as a round sees at least
    /// `quorum_threshold` submissions; no later round runs. Every non-final
    /// round that falls short emits one extension announcement. After
    /// `max_rounds` short rounds returns `Ok(false)`.
    ///
    /// A failed read on a non-final round counts as "not reached yet". A
    /// failed read on the final round leaves the outcome indeterminate and is
    /// returned as an error; the coordinator cannot wait again afterwards.
    pub async fn wait_for_quorum(&mut self) -> Result<bool, BattleError> {
        if self.phase != Phase::Waiting {
            return Err(BattleError::lifecycle(
                LifecycleKind::WaitAlreadyFinished,
                format!("wait_for_quorum called in phase {:?}", self.phase),
            ));
        }

        let policy = self.ctx.policy;
        info!(
            room_id = %self.key.room_id,
            battle_id = %self.key.battle_id,
            max_rounds = policy.max_rounds,
            quorum = policy.quorum_threshold,
            "waiting for hands"
        );

        for round in 0..policy.max_rounds {
            let is_final = round + 1 == policy.max_rounds;
            self.ctx.sleeper.after(policy.round_duration).await;

            match self.submission_count().await {
                Ok(count) if count >= policy.quorum_threshold => {
                    info!(
                        room_id = %self.key.room_id,
                        battle_id = %self.key.battle_id,
                        round,
                        count,
                        "quorum reached"
                    );
                    self.phase = Phase::QuorumReached;
                    return Ok(true);
                }
                Ok(count) => {
                    debug!(
                        room_id = %self.key.room_id,
                        battle_id = %self.key.battle_id,
                        round,
                        count,
                        "quorum not reached"
                    );
                }
                Err(err) if is_final => {
                    error!(
                        room_id = %self.key.room_id,
                        battle_id = %self.key.battle_id,
                        round,
                        error = %err,
                        "final hand count failed; quorum outcome indeterminate"
                    );
                    self.phase = Phase::Indeterminate;
                    return Err(err);
                }
                Err(err) => {
                    warn!(
                        room_id = %self.key.room_id,
                        battle_id = %self.key.battle_id,
                        round,
                        error = %err,
                        "hand count failed; retrying next round"
                    );
                }
            }

            if !is_final {
                info!(
                    room_id = %self.key.room_id,
                    battle_id = %self.key.battle_id,
                    round,
                    "extending wait"
                );
                self.announce_best_effort(self.ctx.catalog.extension(), "extension")
                    .await;
            }
        }

        info!(
            room_id = %self.key.room_id,
            battle_id = %self.key.battle_id,
            "wait timed out"
        );
        self.phase = Phase::TimedOut;
        Ok(false)
    }

    /// Submissions counting toward quorum under the duplicate policy.
    async fn submission_count(&self) -> Result<usize, BattleError> {
        match self.ctx.policy.duplicate_policy {
            DuplicatePolicy::CountAll => self.ctx.store.count_hands(&self.key).await,
            policy => {
                let hands = self.ctx.store.list_hands(&self.key).await?;
                Ok(policy.quorum_count(hands.iter().map(|h| h.author.as_str())))
            }
        }
    }
}
