//! # Inkwell Infrastructure
//!
//! Concrete implementations of the store ports defined in `inkwell-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - SeaORM store on PostgreSQL
//! - `sqlite` - SeaORM store on SQLite (used by the test harness)
//! - `minimal` - No external dependencies, in-memory only

pub mod database;
pub mod memory;

// Re-exports - In-Memory
pub use database::DatabaseConfig;
pub use memory::InMemoryPostStore;

// Re-exports - SeaORM
#[cfg(feature = "sql")]
pub use database::{DatabasePool, SeaOrmPostStore};
