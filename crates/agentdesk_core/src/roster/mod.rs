//! In-memory roster of live agents.
//!
//! # Responsibility
//! - Own the authoritative agent set exclusively.
//! - Hand out snapshots, never shared mutable views.
//!
//! # Invariants
//! - No two live agents share an `AgentId`.
//! - Insertion order is the listing order.

pub mod store;
