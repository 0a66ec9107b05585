#[cfg(feature = "sql")]
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "sql")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

#[cfg(feature = "sql")]
use super::post_store::SeaOrmPostStore;
#[cfg(feature = "sql")]
use super::schema::ensure_schema;

/// Configuration for the post database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 2,
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Connection pool to the post database.
///
/// # Example
/// ```ignore
/// let db = DatabasePool::init(&DatabaseConfig::new("postgres://localhost/blog")).await?;
/// let store = db.post_store();
/// let posts = store.find_all().await?;
/// ```
#[cfg(feature = "sql")]
#[derive(Clone)]
pub struct DatabasePool {
    pub conn: Arc<DbConn>,
}

#[cfg(feature = "sql")]
impl DatabasePool {
    /// Connect and make sure the schema exists.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        ensure_schema(&conn).await?;

        tracing::info!(
            "Database connected (pool: {})",
            config.max_connections
        );

        Ok(Self {
            conn: Arc::new(conn),
        })
    }

    /// A post store sharing this pool.
    pub fn post_store(&self) -> SeaOrmPostStore {
        SeaOrmPostStore::new(Arc::clone(&self.conn))
    }

    /// Round-trip to the database.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.conn.ping().await
    }
}
