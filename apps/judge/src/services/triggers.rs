//! Entry points for the two storage events.
//!
//! Battle creation drives the full lifecycle. Hand creation only announces
//! the submission; it never waits, judges or closes, and it does not emit a
//! start announcement.

use serde::Serialize;
use tracing::{error, info};

use super::battle::{BattleContext, BattleCoordinator};
use crate::domain::Outcome;
use crate::errors::domain::BattleError;
use crate::repos::BattleKey;

/// What one battle lifecycle produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifecycleReport {
    pub quorum_reached: bool,
    /// Present when the battle was judged
    pub outcome: Option<Outcome>,
}

/// Run the whole lifecycle for a newly created battle.
///
/// Open (start announcement), wait for quorum, then either announce the
/// timeout or judge, and finally close. On error the battle is left open
/// and the failure is logged for diagnosis.
pub async fn on_battle_created(
    ctx: BattleContext,
    key: BattleKey,
) -> Result<LifecycleReport, BattleError> {
    info!(room_id = %key.room_id, battle_id = %key.battle_id, "battle created");
    let mut battle = BattleCoordinator::open(ctx, key).await;

    let result = run_lifecycle(&mut battle).await;
    if let Err(err) = &result {
        error!(
            room_id = %battle.key().room_id,
            battle_id = %battle.key().battle_id,
            phase = ?battle.phase(),
            error = %err,
            "battle lifecycle failed; battle left open"
        );
    }
    result
}

async fn run_lifecycle(battle: &mut BattleCoordinator) -> Result<LifecycleReport, BattleError> {
    if !battle.wait_for_quorum().await? {
        battle.announce_timeout().await;
        battle.close().await?;
        return Ok(LifecycleReport {
            quorum_reached: false,
            outcome: None,
        });
    }

    let outcome = battle.judge().await?;
    battle.close().await?;
    Ok(LifecycleReport {
        quorum_reached: true,
        outcome: Some(outcome),
    })
}

/// Announce a freshly created hand submission.
pub async fn on_hand_created(
    ctx: BattleContext,
    key: BattleKey,
    author: &str,
) -> Result<(), BattleError> {
    info!(room_id = %key.room_id, battle_id = %key.battle_id, author, "hand created");
    BattleCoordinator::new(ctx, key)
        .announce_submission(author)
        .await
}
