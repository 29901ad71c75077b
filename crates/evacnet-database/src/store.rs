//! Record store that dispatches to the configured backend.

use std::sync::Arc;

use tracing::info;

use evacnet_core::config::{DatabaseBackend, DatabaseConfig};
use evacnet_core::result::AppResult;
use evacnet_core::traits::Repository;
use evacnet_core::types::{NewsId, UserId};
use evacnet_entity::news::{CreateNews, News, UpdateNews};
use evacnet_entity::user::{CreateUser, UpdateUser, User};

use crate::connection::DatabasePool;
use crate::memory::{MemoryNewsRepository, MemoryUserRepository};
use crate::migration::run_migrations;
use crate::repositories::{NewsRepository, UserRepository};

/// Shared handle to a news repository.
pub type NewsRepo = Arc<dyn Repository<NewsId, News, CreateNews, UpdateNews>>;

/// Shared handle to a user repository.
pub type UserRepo = Arc<dyn Repository<UserId, User, CreateUser, UpdateUser>>;

/// The `news` and `users` repositories of one backend.
///
/// The backend is selected at construction time based on configuration.
#[derive(Clone)]
pub struct RecordStore {
    /// News repository.
    pub news: NewsRepo,
    /// User repository.
    pub users: UserRepo,
    /// Pool backing the repositories, absent for the memory backend.
    pool: Option<DatabasePool>,
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("backend", &self.backend())
            .finish()
    }
}

impl RecordStore {
    /// Open the configured backend, running migrations for PostgreSQL when
    /// enabled.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            DatabaseBackend::Postgres => {
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            DatabaseBackend::Memory => {
                info!("Using in-memory record store");
                Ok(Self::memory())
            }
        }
    }

    /// Build PostgreSQL repositories over an open pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        Self {
            news: Arc::new(NewsRepository::new(pool.pool().clone())),
            users: Arc::new(UserRepository::new(pool.pool().clone())),
            pool: Some(pool),
        }
    }

    /// Build empty in-memory repositories.
    pub fn memory() -> Self {
        Self {
            news: Arc::new(MemoryNewsRepository::new()),
            users: Arc::new(MemoryUserRepository::new()),
            pool: None,
        }
    }

    /// Which backend the repositories use.
    pub fn backend(&self) -> DatabaseBackend {
        if self.pool.is_some() {
            DatabaseBackend::Postgres
        } else {
            DatabaseBackend::Memory
        }
    }

    /// Check connectivity of the backing store.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
