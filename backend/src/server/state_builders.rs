//! Builders selecting the store behind the HTTP state.

use std::sync::Arc;

use tracing::{info, warn};

use scanfood::inbound::http::state::HttpState;
use scanfood::outbound::memory::InMemoryStore;
use scanfood::outbound::persistence::{
    DbPool, DieselConfirmationLogRepository, DieselFoodRepository, DieselSensitivityRepository,
    DieselUserRepository, PoolConfig, run_pending_migrations,
};

use super::ServerSettings;

/// Build handler state over PostgreSQL when a database URL is configured,
/// otherwise over a fresh in-memory store.
///
/// # Errors
///
/// Returns [`std::io::Error`] when migrations fail or the pool cannot be
/// built.
pub async fn build_http_state(settings: &ServerSettings) -> std::io::Result<HttpState> {
    let Some(url) = settings.database_url() else {
        warn!("no database configured; data will not survive a restart");
        return Ok(memory_state());
    };

    if settings.run_migrations {
        run_pending_migrations(url)
            .await
            .map_err(|err| std::io::Error::other(err.to_string()))?;
    }
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_size()))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    info!(pool_size = settings.pool_size(), "using PostgreSQL store");
    Ok(diesel_state(&pool))
}

fn memory_state() -> HttpState {
    let store = Arc::new(InMemoryStore::default());
    HttpState::from_repositories(store.clone(), store.clone(), store.clone(), store)
}

fn diesel_state(pool: &DbPool) -> HttpState {
    HttpState::from_repositories(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselFoodRepository::new(pool.clone())),
        Arc::new(DieselSensitivityRepository::new(pool.clone())),
        Arc::new(DieselConfirmationLogRepository::new(pool.clone())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use ortho_config::OrthoConfig;
    use rstest::rstest;
    use scanfood::domain::ports::FoodCatalogueQuery;

    #[rstest]
    #[tokio::test]
    async fn missing_database_url_falls_back_to_memory() {
        let _guard = env_lock::lock_env([("SCANFOOD_DATABASE_URL", None::<String>)]);
        let settings = ServerSettings::load_from_iter([OsString::from("scanfood")])
            .expect("config should load");
        let state = build_http_state(&settings).await.expect("memory state");
        let contents = state.catalogue.list_contents().await.expect("list contents");
        assert!(contents.is_empty());
    }
}
