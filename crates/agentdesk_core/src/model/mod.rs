//! Domain model for agents, contact records and distributions.
//!
//! # Responsibility
//! - Define canonical data structures used by roster and partition logic.
//! - Keep validation next to the types whose invariants it protects.
//!
//! # Invariants
//! - Every agent is identified by a stable `AgentId`.
//! - Distributions hold snapshots of agent identity, never live agents.

pub mod agent;
pub mod contact;
pub mod distribution;
