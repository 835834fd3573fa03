//! PostgreSQL implementations of the source and destination repositories.
mod connection;
mod destination_repository;
mod source_repository;

pub use connection::{connect_destination, connect_source};
pub use destination_repository::{
    DEFAULT_INSERT_BATCH_SIZE, PostgresDestinationRepository, PostgresDestinationTransaction,
};
pub use source_repository::PostgresSourceRepository;
