//! Roster database bootstrap.
//!
//! Connections handed to `SqliteAgentRepository` come from here, already
//! migrated to the `agents` schema. Failures surface as `RepoError`, the same
//! error the repository reports, so callers handle one storage error type.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
