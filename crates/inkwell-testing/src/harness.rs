//! Per-test store lifecycle: fresh store, seed, teardown.

use std::sync::Arc;

use tempfile::TempDir;
use thiserror::Error;

use inkwell_core::domain::BlogPost;
use inkwell_core::error::RepoError;
use inkwell_core::ports::{PostStore, StoreReset};
use inkwell_infra::{DatabaseConfig, DatabasePool, InMemoryPostStore};

use crate::fixtures::generate_posts;

/// Number of posts seeded before each test case.
pub const SEED_COUNT: usize = 10;

/// Test harness errors.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Test database setup failed: {0}")]
    Database(String),

    #[error(transparent)]
    Store(#[from] RepoError),

    #[error("Temporary directory unavailable: {0}")]
    Io(#[from] std::io::Error),
}

/// Which store a test case runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// SeaORM store on a SQLite file in a temporary directory.
    Sqlite,
    /// In-memory store.
    Memory,
}

/// A store owned by one test case.
///
/// The reset capability stays here, next to the store, so it never needs to
/// be part of what the HTTP layer sees.
pub struct TestStore {
    store: Arc<dyn PostStore>,
    reset: Arc<dyn StoreReset>,
    seeded: Vec<BlogPost>,
    _dir: Option<TempDir>,
}

impl TestStore {
    /// SQLite-backed store seeded with [`SEED_COUNT`] posts.
    pub async fn setup() -> Result<Self, HarnessError> {
        Self::setup_with(Backend::Sqlite, SEED_COUNT).await
    }

    /// Store on `backend`, seeded with `seed_count` posts.
    pub async fn setup_with(backend: Backend, seed_count: usize) -> Result<Self, HarnessError> {
        let (store, reset, dir): (Arc<dyn PostStore>, Arc<dyn StoreReset>, Option<TempDir>) =
            match backend {
                Backend::Sqlite => {
                    let dir = TempDir::new()?;
                    let path = dir.path().join("posts.db");
                    let url = format!("sqlite://{}?mode=rwc", path.display());
                    let config = DatabaseConfig {
                        max_connections: 4,
                        min_connections: 1,
                        ..DatabaseConfig::new(url)
                    };
                    let pool = DatabasePool::init(&config)
                        .await
                        .map_err(|e| HarnessError::Database(e.to_string()))?;
                    let concrete = Arc::new(pool.post_store());
                    let reset: Arc<dyn StoreReset> = concrete.clone();
                    let store: Arc<dyn PostStore> = concrete;
                    (store, reset, Some(dir))
                }
                Backend::Memory => {
                    let concrete = Arc::new(InMemoryPostStore::new());
                    let reset: Arc<dyn StoreReset> = concrete.clone();
                    let store: Arc<dyn PostStore> = concrete;
                    (store, reset, None)
                }
            };

        let seeded = seed_posts(store.as_ref(), seed_count).await?;

        Ok(Self {
            store,
            reset,
            seeded,
            _dir: dir,
        })
    }

    /// The store, as the HTTP layer sees it.
    pub fn store(&self) -> Arc<dyn PostStore> {
        Arc::clone(&self.store)
    }

    /// Posts inserted during setup, in insertion order.
    pub fn seeded(&self) -> &[BlogPost] {
        &self.seeded
    }

    /// Wipe every record. Returns how many were removed.
    pub async fn teardown(self) -> Result<u64, HarnessError> {
        tracing::warn!("Deleting database.");
        Ok(self.reset.drop_all().await?)
    }
}

/// Insert `count` generated posts as one batch.
pub async fn seed_posts(store: &dyn PostStore, count: usize) -> Result<Vec<BlogPost>, RepoError> {
    tracing::info!(count, "Seeding blog post data");
    store.insert_many(generate_posts(count)).await
}
