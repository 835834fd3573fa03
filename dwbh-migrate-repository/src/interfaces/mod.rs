//! This module defines and re-exports the interfaces for the migration
//! repositories.
mod destination;
mod source;

pub use destination::{DestinationRepository, DestinationTransaction};
pub use source::SourceRepository;
