//! Agent storage contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the get-all/put/delete contract used to persist the roster.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `Agent::validate()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - `load_agents` returns agents in the order they were first stored.

use crate::model::agent::{Agent, AgentId, AgentValidationError};
use chrono::{DateTime, Utc};
use log::{debug, error};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;
use uuid::Uuid;

const AGENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    email,
    phone,
    created_at
FROM agents";

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage error for roster persistence and database bootstrap.
///
/// Messages never carry stored field values, only column names and IDs.
#[derive(Debug)]
pub enum RepoError {
    Validation(AgentValidationError),
    Sqlite(rusqlite::Error),
    /// Database was written by a newer schema than this binary knows.
    SchemaTooNew { found: u32, supported: u32 },
    /// Schema step `version` failed; no pending step was applied.
    Migration { version: u32, source: rusqlite::Error },
    /// A stored row breaks agent invariants in `column`.
    InvalidData {
        agent_id: Option<AgentId>,
        column: &'static str,
    },
}

impl RepoError {
    /// Stable code for log events.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "invalid_agent",
            Self::Sqlite(_) => "sqlite",
            Self::SchemaTooNew { .. } => "schema_too_new",
            Self::Migration { .. } => "migration_failed",
            Self::InvalidData { .. } => "invalid_row",
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "roster database schema version {found} is newer than supported {supported}"
            ),
            Self::Migration { version, source } => {
                write!(f, "roster schema step {version} failed: {source}")
            }
            Self::InvalidData {
                agent_id: Some(id),
                column,
            } => write!(f, "invalid persisted agents.{column} for agent {id}"),
            Self::InvalidData {
                agent_id: None,
                column,
            } => write!(f, "invalid persisted agents.{column}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Sqlite(err) => Some(err),
            Self::Migration { source, .. } => Some(source),
            Self::SchemaTooNew { .. } | Self::InvalidData { .. } => None,
        }
    }
}

impl From<AgentValidationError> for RepoError {
    fn from(value: AgentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Durable storage contract for the roster.
pub trait AgentRepository {
    /// Returns every stored agent in first-stored order.
    fn load_agents(&self) -> RepoResult<Vec<Agent>>;
    /// Inserts the agent, or overwrites the stored row with the same ID.
    fn put_agent(&self, agent: &Agent) -> RepoResult<()>;
    /// Deletes the agent with `id`. Returns whether a row was removed.
    fn delete_agent(&self, id: AgentId) -> RepoResult<bool>;
}

/// SQLite-backed agent repository.
pub struct SqliteAgentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAgentRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AgentRepository for SqliteAgentRepository<'_> {
    fn load_agents(&self) -> RepoResult<Vec<Agent>> {
        let started_at = Instant::now();
        let mut stmt = self
            .conn
            .prepare(&format!("{AGENT_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut agents = Vec::new();

        while let Some(row) = rows.next()? {
            match parse_agent_row(row) {
                Ok(agent) => agents.push(agent),
                Err(err) => {
                    let (agent_id, field) = match &err {
                        RepoError::InvalidData { agent_id, column } => {
                            (agent_id.map(|id| id.to_string()), *column)
                        }
                        _ => (None, "-"),
                    };
                    error!(
                        "event=agents_load module=repo status=error error_code={} agent_id={} field={}",
                        err.error_code(),
                        agent_id.as_deref().unwrap_or("-"),
                        field
                    );
                    return Err(err);
                }
            }
        }

        debug!(
            "event=agents_load module=repo status=ok count={} duration_ms={}",
            agents.len(),
            started_at.elapsed().as_millis()
        );
        Ok(agents)
    }

    fn put_agent(&self, agent: &Agent) -> RepoResult<()> {
        agent.validate()?;

        self.conn.execute(
            "INSERT INTO agents (
                id,
                name,
                email,
                phone,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                email = excluded.email,
                phone = excluded.phone,
                created_at = excluded.created_at;",
            params![
                agent.id.to_string(),
                agent.name.as_str(),
                agent.email.as_str(),
                agent.phone.as_str(),
                agent.created_at.timestamp_millis(),
            ],
        )?;

        debug!(
            "event=agent_put module=repo status=ok agent_id={}",
            agent.id
        );
        Ok(())
    }

    fn delete_agent(&self, id: AgentId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM agents WHERE id = ?1;", [id.to_string()])?;

        debug!(
            "event=agent_delete module=repo status=ok agent_id={} removed={}",
            id,
            changed > 0
        );
        Ok(changed > 0)
    }
}

fn parse_agent_row(row: &Row<'_>) -> RepoResult<Agent> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| RepoError::InvalidData {
        agent_id: None,
        column: "id",
    })?;

    let created_at_ms: i64 = row.get("created_at")?;
    let created_at =
        DateTime::<Utc>::from_timestamp_millis(created_at_ms).ok_or(RepoError::InvalidData {
            agent_id: Some(id),
            column: "created_at",
        })?;

    let name: String = row.get("name")?;
    let email: String = row.get("email")?;
    let phone: String = row.get("phone")?;

    Agent::with_id(id, name, email, phone, created_at).map_err(|err| RepoError::InvalidData {
        agent_id: Some(id),
        column: err.field().as_str(),
    })
}
