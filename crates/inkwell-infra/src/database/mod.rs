//! SeaORM-backed storage and connection management.

mod connections;

#[cfg(feature = "sql")]
pub mod entity;
#[cfg(feature = "sql")]
mod post_store;
#[cfg(feature = "sql")]
mod schema;
#[cfg(feature = "sql")]
mod sea_orm_base;

pub use connections::DatabaseConfig;

#[cfg(feature = "sql")]
pub use connections::DatabasePool;
#[cfg(feature = "sql")]
pub use post_store::SeaOrmPostStore;
#[cfg(feature = "sql")]
pub use schema::ensure_schema;
#[cfg(feature = "sql")]
pub use sea_orm_base::SeaOrmRepository;

#[cfg(all(test, feature = "sql"))]
mod tests;
