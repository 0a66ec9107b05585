//! # Inkwell Testing
//!
//! Test support for the Inkwell blog service:
//!
//! - **Fixtures**: random but plausible blog posts (author names, catch-phrase
//!   titles, lorem paragraphs, past dates), reproducible from a seed
//! - **Store lifecycle**: a fresh, seeded store per test case and an explicit
//!   teardown that wipes it
//!
//! ```ignore
//! let ctx = TestStore::setup().await?;
//! let posts = ctx.store().find_all().await?;
//! assert_eq!(posts.len(), SEED_COUNT);
//! ctx.teardown().await?;
//! ```

pub mod fixtures;
pub mod harness;

pub use harness::{Backend, HarnessError, SEED_COUNT, TestStore};
