//! In-memory store implementations - used when no database is configured.

mod post_store;

pub use post_store::InMemoryPostStore;
