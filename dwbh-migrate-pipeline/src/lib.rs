//! # dwbh Migrate Pipeline
//! This crate holds the migration logic itself: identity maps that relink
//! legacy ids to freshly generated ones, the five entity migrators, and the
//! orchestrator that runs them in dependency order inside a single
//! destination transaction.
pub mod errors;
pub mod identity;
pub mod migrators;
pub mod orchestrator;
pub mod timezone;

pub use identity::IdentityMap;
pub use orchestrator::{Orchestrator, OrchestratorConfig};
