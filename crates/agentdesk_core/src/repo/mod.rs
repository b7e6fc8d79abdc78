//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable storage contract for the roster.
//! - Isolate SQLite query details from roster and service logic.
//!
//! # Invariants
//! - Repository writes must enforce `Agent::validate()` before persistence.
//! - Deleting an absent agent is not an error.

pub mod agent_repo;
