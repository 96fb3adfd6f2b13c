use futures::future::join_all;
use tracing::{error, info, warn};

use super::{BattleCoordinator, Phase};
use crate::domain::{self, parse_submission, DuplicatePolicy, Hand, HandSubmission, Outcome, Tally};
use crate::errors::domain::{BattleError, LifecycleKind};
use crate::repos::HandRecord;

/// Tally built from stored records plus the records that were rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tabulation {
    pub tally: Tally,
    /// Malformed records; never bucketed
    pub rejected: Vec<BattleError>,
}

/// Parse stored records, reject malformed ones and apply the duplicate policy.
pub fn tabulate(records: Vec<HandRecord>, policy: DuplicatePolicy) -> Tabulation {
    let mut rejected = Vec::new();
    let mut parsed = Vec::with_capacity(records.len());

    for record in records {
        match parse_submission(&record.author, &record.hand) {
            Ok(hand) => parsed.push(HandSubmission {
                author: record.author,
                hand,
                submitted_at: record.submitted_at,
            }),
            Err(err) => {
                warn!(author = %record.author, value = %record.hand, "rejected malformed submission");
                rejected.push(err);
            }
        }
    }

    Tabulation {
        tally: Tally::from_submissions(policy.apply(parsed)),
        rejected,
    }
}

impl BattleCoordinator {
    /// Judge the battle and announce the result.
    ///
    /// Reads the submissions afresh, so hands that arrived after quorum was
    /// observed are included. Announces, in order: the draw or the winning
    /// hand followed by the winners, then one roster per hand (rock, scissor,
    /// paper). All announcements are durable when this returns `Ok`; any
    /// failed delivery is returned as an error.
    ///
    /// A failed hand read can be retried. Once announcing has started, a
    /// failure is final and later calls report `AlreadyJudged`.
    pub async fn judge(&mut self) -> Result<Outcome, BattleError> {
        match self.phase {
            Phase::QuorumReached => {}
            Phase::Announcing | Phase::Judged | Phase::Closed => {
                return Err(BattleError::lifecycle(
                    LifecycleKind::AlreadyJudged,
                    format!("judge called in phase {:?}", self.phase),
                ))
            }
            Phase::Waiting | Phase::TimedOut | Phase::Indeterminate => {
                return Err(BattleError::lifecycle(
                    LifecycleKind::JudgeWithoutQuorum,
                    format!("judge called in phase {:?}", self.phase),
                ))
            }
        }

        let records = self.ctx.store.list_hands(&self.key).await?;
        let Tabulation { tally, rejected } = tabulate(records, self.ctx.policy.duplicate_policy);
        let outcome = domain::judge(&tally);

        info!(
            room_id = %self.key.room_id,
            battle_id = %self.key.battle_id,
            hands = tally.len(),
            rejected = rejected.len(),
            distinct = tally.distinct_count(),
            winner = ?outcome.winning_hand(),
            "battle judged"
        );

        // No announcement below is ever repeated by a later call.
        self.phase = Phase::Announcing;
        let catalog = &self.ctx.catalog;
        match &outcome {
            Outcome::Draw => {
                self.announce(catalog.draw()).await?;
            }
            Outcome::Win { hand, authors } => {
                self.announce(catalog.winning_hand(*hand)).await?;
                self.announce(catalog.winners(authors)).await?;
            }
        }

        self.announce_rosters(&tally).await?;

        self.phase = Phase::Judged;
        Ok(outcome)
    }

    /// Emit one roster per hand in roster order and wait for all of them.
    ///
    /// Every emission runs to completion before this returns, even when one
    /// of them fails; the first failure is then returned.
    async fn announce_rosters(&self, tally: &Tally) -> Result<(), BattleError> {
        let catalog = &self.ctx.catalog;
        let pending = Hand::ALL
            .into_iter()
            .map(|hand| self.announce(catalog.roster(hand, &tally.authors(hand))));

        let failures: Vec<BattleError> = join_all(pending)
            .await
            .into_iter()
            .filter_map(Result::err)
            .collect();

        match failures.into_iter().next() {
            None => Ok(()),
            Some(first) => {
                error!(
                    room_id = %self.key.room_id,
                    battle_id = %self.key.battle_id,
                    error = %first,
                    "roster announcement failed"
                );
                Err(first)
            }
        }
    }
}
