//! Error types for the migration repositories.
//! Consolidates and re-exports the errors raised while reading the source
//! database and writing the destination database.
mod destination;
mod source;

pub use destination::DestinationRepositoryError;
pub use source::SourceRepositoryError;
