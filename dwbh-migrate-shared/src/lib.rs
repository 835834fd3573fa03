//! # dwbh Migrate Shared
//! This crate defines the data structures shared across the dwbh v1 to v2
//! migration workspace.
//! It includes the legacy (v1) row shapes read from the source database, the
//! migrated (v2) records written to the destination, and the run report.
pub mod types;
