//! # dwbh Migrate Repository
//! This crate provides traits and implementations for reading the v1 (source)
//! database and writing the v2 (destination) database. It includes definitions
//! for errors, interfaces, and concrete implementations for PostgreSQL.
pub mod errors;
pub mod interfaces;
pub mod postgres;

pub use errors::{DestinationRepositoryError, SourceRepositoryError};
pub use interfaces::{DestinationRepository, DestinationTransaction, SourceRepository};
pub use postgres::{PostgresDestinationRepository, PostgresSourceRepository};
