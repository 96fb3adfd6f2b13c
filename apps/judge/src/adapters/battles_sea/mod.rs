//! SeaORM adapter for the battle store - generic over ConnectionTrait.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, Statement,
};
use parking_lot::Mutex;
use time::{Duration, OffsetDateTime};
use tracing::warn;

use crate::entities::{battle_hands, battle_messages, battles};
use crate::errors::domain::BattleError;
use crate::repos::{
    Announcement, AnnouncementCreate, BattleKey, BattleState, BattleStore, HandCreate, HandRecord,
};

/// Count hand rows for a battle
pub async fn count_hands<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    key: &BattleKey,
) -> Result<u64, sea_orm::DbErr> {
    battle_hands::Entity::find()
        .filter(battle_hands::Column::RoomId.eq(key.room_id.as_str()))
        .filter(battle_hands::Column::BattleId.eq(key.battle_id.as_str()))
        .count(conn)
        .await
}

/// Find all hand rows for a battle in insertion order
pub async fn find_hands<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    key: &BattleKey,
) -> Result<Vec<battle_hands::Model>, sea_orm::DbErr> {
    battle_hands::Entity::find()
        .filter(battle_hands::Column::RoomId.eq(key.room_id.as_str()))
        .filter(battle_hands::Column::BattleId.eq(key.battle_id.as_str()))
        .order_by_asc(battle_hands::Column::Id)
        .all(conn)
        .await
}

/// Insert a hand row
pub async fn create_hand<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    key: &BattleKey,
    dto: HandCreate,
) -> Result<battle_hands::Model, sea_orm::DbErr> {
    let hand = battle_hands::ActiveModel {
        id: sea_orm::NotSet,
        room_id: Set(key.room_id.clone()),
        battle_id: Set(key.battle_id.clone()),
        author: Set(dto.author),
        hand: Set(dto.hand),
        created_at: Set(OffsetDateTime::now_utc()),
    };

    hand.insert(conn).await
}

/// Insert a message row stamped with the server-assigned `created_at`
pub async fn create_message<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    key: &BattleKey,
    dto: AnnouncementCreate,
    created_at: OffsetDateTime,
) -> Result<battle_messages::Model, sea_orm::DbErr> {
    let message = battle_messages::ActiveModel {
        id: sea_orm::NotSet,
        room_id: Set(key.room_id.clone()),
        battle_id: Set(key.battle_id.clone()),
        sender_kind: Set(dto.sender_kind),
        display_name: Set(dto.display_name),
        body: Set(dto.body),
        created_at: Set(created_at),
    };

    message.insert(conn).await
}

/// Find all message rows for a battle ordered by server timestamp
pub async fn find_messages<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    key: &BattleKey,
) -> Result<Vec<battle_messages::Model>, sea_orm::DbErr> {
    battle_messages::Entity::find()
        .filter(battle_messages::Column::RoomId.eq(key.room_id.as_str()))
        .filter(battle_messages::Column::BattleId.eq(key.battle_id.as_str()))
        .order_by_asc(battle_messages::Column::CreatedAt)
        .order_by_asc(battle_messages::Column::Id)
        .all(conn)
        .await
}

/// Find the battle row
pub async fn find_battle<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    key: &BattleKey,
) -> Result<Option<battles::Model>, sea_orm::DbErr> {
    battles::Entity::find_by_id((key.room_id.clone(), key.battle_id.clone()))
        .one(conn)
        .await
}

/// Update the state column. Returns the number of rows touched.
pub async fn update_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    key: &BattleKey,
    state: BattleState,
) -> Result<u64, sea_orm::DbErr> {
    let result = battles::Entity::update_many()
        .col_expr(battles::Column::State, Expr::value(state.as_str()))
        .filter(battles::Column::RoomId.eq(key.room_id.as_str()))
        .filter(battles::Column::BattleId.eq(key.battle_id.as_str()))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Round-trip a trivial query
pub async fn ping<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<(), sea_orm::DbErr> {
    conn.query_one(Statement::from_string(
        conn.get_database_backend(),
        "SELECT 1 AS ping".to_string(),
    ))
    .await?;
    Ok(())
}

impl From<battle_hands::Model> for HandRecord {
    fn from(model: battle_hands::Model) -> Self {
        Self {
            author: model.author,
            hand: model.hand,
            submitted_at: Some(model.created_at),
        }
    }
}

impl From<battle_messages::Model> for Announcement {
    fn from(model: battle_messages::Model) -> Self {
        Self {
            sender_kind: model.sender_kind,
            display_name: model.display_name,
            body: model.body,
            created_at: model.created_at,
        }
    }
}

/// Strictly increasing message timestamps at microsecond resolution (the
/// precision of `timestamptz`).
///
/// Roster announcements are inserted concurrently, so row ids do not follow
/// announcement order. Stamps are taken in announcement order, and keeping
/// them distinct makes `ORDER BY created_at` reproduce that order.
#[derive(Debug, Default)]
pub struct MessageClock {
    last: Mutex<Option<OffsetDateTime>>,
}

impl MessageClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> OffsetDateTime {
        self.next_after(OffsetDateTime::now_utc())
    }

    fn next_after(&self, now: OffsetDateTime) -> OffsetDateTime {
        let now = now
            .replace_nanosecond(now.nanosecond() / 1_000 * 1_000)
            .unwrap_or(now);
        let mut last = self.last.lock();
        let stamp = match *last {
            Some(prev) if now <= prev => prev + Duration::microseconds(1),
            _ => now,
        };
        *last = Some(stamp);
        stamp
    }
}

/// SeaORM implementation of BattleStore.
#[derive(Debug)]
pub struct BattleStoreSea {
    db: DatabaseConnection,
    clock: MessageClock,
}

impl BattleStoreSea {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            clock: MessageClock::new(),
        }
    }
}

#[async_trait]
impl BattleStore for BattleStoreSea {
    async fn count_hands(&self, key: &BattleKey) -> Result<usize, BattleError> {
        let count = count_hands(&self.db, key).await?;
        usize::try_from(count).map_err(|_| BattleError::storage("hand count overflows usize"))
    }

    async fn list_hands(&self, key: &BattleKey) -> Result<Vec<HandRecord>, BattleError> {
        let hands = find_hands(&self.db, key).await?;
        Ok(hands.into_iter().map(HandRecord::from).collect())
    }

    async fn append_message(
        &self,
        key: &BattleKey,
        message: AnnouncementCreate,
    ) -> Result<(), BattleError> {
        create_message(&self.db, key, message, self.clock.next()).await?;
        Ok(())
    }

    async fn set_battle_state(
        &self,
        key: &BattleKey,
        state: BattleState,
    ) -> Result<(), BattleError> {
        let rows = update_state(&self.db, key, state).await?;
        if rows == 0 {
            warn!(%key, state = state.as_str(), "battle row missing on state update");
            return Err(BattleError::storage(format!("battle {key} not found")));
        }
        Ok(())
    }

    async fn append_hand(&self, key: &BattleKey, hand: HandCreate) -> Result<(), BattleError> {
        create_hand(&self.db, key, hand).await?;
        Ok(())
    }

    async fn find_battle_state(
        &self,
        key: &BattleKey,
    ) -> Result<Option<BattleState>, BattleError> {
        find_battle(&self.db, key)
            .await?
            .map(|b| b.state.parse::<BattleState>())
            .transpose()
    }

    async fn list_messages(&self, key: &BattleKey) -> Result<Vec<Announcement>, BattleError> {
        let messages = find_messages(&self.db, key).await?;
        Ok(messages.into_iter().map(Announcement::from).collect())
    }

    async fn ping(&self) -> Result<(), BattleError> {
        ping(&self.db).await?;
        Ok(())
    }
}
