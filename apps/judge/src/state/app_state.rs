use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use crate::adapters::{BattleStoreSea, MemoryBattleStore};
use crate::config::db::{db_url, store_kind, DbProfile, StoreKind};
use crate::config::policy::locale_from_env;
use crate::config::BattlePolicy;
use crate::domain::Catalog;
use crate::error::AppError;
use crate::infra::{Sleeper, TokioSleeper};
use crate::repos::BattleStore;
use crate::services::BattleContext;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Collaborators handed to every battle coordinator
    pub battles: BattleContext,
}

impl AppState {
    pub fn new(battles: BattleContext) -> Self {
        Self { battles }
    }

    /// State over an explicit store, with the tokio sleeper.
    pub fn with_store(
        store: Arc<dyn BattleStore>,
        catalog: Arc<dyn Catalog>,
        policy: BattlePolicy,
    ) -> Self {
        Self::new(BattleContext::new(
            store,
            Arc::new(TokioSleeper),
            catalog,
            policy,
        ))
    }

    pub fn store(&self) -> &Arc<dyn BattleStore> {
        &self.battles.store
    }

    /// Test state over an in-memory store and an injected sleeper.
    pub fn for_tests(
        store: Arc<MemoryBattleStore>,
        sleeper: Arc<dyn Sleeper>,
        catalog: Arc<dyn Catalog>,
    ) -> Self {
        Self::new(BattleContext::new(
            store,
            sleeper,
            catalog,
            BattlePolicy::default(),
        ))
    }
}

/// Build application state from the environment.
///
/// Reads the battle policy, the announcement locale and the store backend,
/// connecting to Postgres when that backend is selected.
pub async fn build_state() -> Result<AppState, AppError> {
    let policy = BattlePolicy::from_env()?;
    let catalog: Arc<dyn Catalog> = Arc::from(locale_from_env()?.catalog());

    let store: Arc<dyn BattleStore> = match store_kind()? {
        StoreKind::Memory => {
            info!("using in-memory battle store");
            Arc::new(MemoryBattleStore::new())
        }
        StoreKind::Postgres => {
            let url = db_url(DbProfile::Prod)?;
            let db = Database::connect(url).await?;
            info!("connected to postgres battle store");
            Arc::new(BattleStoreSea::new(db))
        }
    };

    info!(
        max_rounds = policy.max_rounds,
        round_secs = policy.round_duration.as_secs(),
        quorum = policy.quorum_threshold,
        duplicates = ?policy.duplicate_policy,
        "battle policy loaded"
    );
    Ok(AppState::with_store(store, catalog, policy))
}
