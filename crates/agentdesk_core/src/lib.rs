//! Core domain logic for AgentDesk.
//!
//! Agents are registered into a roster; uploaded contact lists are split into
//! contiguous, near-equal blocks, one per agent.

pub mod db;
pub mod logging;
pub mod model;
pub mod partition;
pub mod repo;
pub mod roster;
pub mod service;
pub mod session;

pub use logging::{default_log_level, flush_logs, init_logging, logging_status, LoggingError};
pub use model::agent::{validate_fields, Agent, AgentField, AgentId, AgentValidationError};
pub use model::contact::ContactRecord;
pub use model::distribution::{AgentGroup, Distribution};
pub use partition::engine::{distribute, group_sizes};
pub use repo::agent_repo::{AgentRepository, RepoError, RepoResult, SqliteAgentRepository};
pub use roster::store::{RosterError, RosterResult, RosterStore};
pub use service::dashboard::{dashboard_stats, DashboardStats};
pub use service::roster_service::RosterService;
pub use service::upload_service::{is_supported_upload, UploadError, UploadService};
pub use session::{Session, SessionError};

/// Minimal health-check API for smoke checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
