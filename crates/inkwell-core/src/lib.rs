//! # Inkwell Core
//!
//! The domain layer of the Inkwell blog service.
//! This crate contains the post entity and store ports, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
