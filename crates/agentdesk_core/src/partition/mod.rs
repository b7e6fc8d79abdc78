//! Contact list partitioning.
//!
//! # Responsibility
//! - Split an ordered record list across an agent snapshot.
//!
//! # Invariants
//! - Partitioning is a pure function of its inputs and keeps no state.

pub mod engine;
