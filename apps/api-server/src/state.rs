//! Application state - shared across all handlers.

use std::sync::Arc;

use thiserror::Error;

use inkwell_core::ports::PostStore;
use inkwell_infra::{DatabaseConfig, InMemoryPostStore};

#[cfg(feature = "database")]
use inkwell_infra::DatabasePool;

/// Failures that keep the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to connect to database: {0}")]
    Database(String),

    #[error("DATABASE_URL is set but this build has no database support")]
    DatabaseUnsupported,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
    #[cfg(feature = "database")]
    pub db: Option<DatabasePool>,
}

impl AppState {
    /// State around an existing store, with no database handle.
    pub fn with_store(posts: Arc<dyn PostStore>) -> Self {
        Self {
            posts,
            #[cfg(feature = "database")]
            db: None,
        }
    }

    /// Build the application state with appropriate implementations.
    ///
    /// Without a database config the in-memory store is used. With one, a
    /// failed connection is an error rather than a silent fallback.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Result<Self, StartupError> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Ok(Self::with_store(Arc::new(InMemoryPostStore::new())));
        };

        Self::connect(config).await
    }

    #[cfg(feature = "database")]
    async fn connect(config: &DatabaseConfig) -> Result<Self, StartupError> {
        let pool = DatabasePool::init(config)
            .await
            .map_err(|e| StartupError::Database(e.to_string()))?;
        let posts: Arc<dyn PostStore> = Arc::new(pool.post_store());

        tracing::info!("Application state initialized");
        Ok(Self {
            posts,
            db: Some(pool),
        })
    }

    #[cfg(not(feature = "database"))]
    async fn connect(config: &DatabaseConfig) -> Result<Self, StartupError> {
        tracing::error!(url = %config.url, "Built without database support");
        Err(StartupError::DatabaseUnsupported)
    }
}
