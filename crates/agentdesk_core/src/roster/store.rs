//! Roster store and roster-level errors.
//!
//! # Responsibility
//! - Provide add/remove/list over the live agent set.
//! - Reject duplicate identities when seeding from storage.
//!
//! # Invariants
//! - Every mutation either fully applies or leaves the roster untouched.
//! - Writers take `&mut self`, so snapshots always reflect completed writes.

use crate::model::agent::{Agent, AgentId, AgentValidationError};
use crate::repo::agent_repo::RepoError;
use crate::session::SessionError;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RosterResult<T> = Result<T, RosterError>;

/// Errors raised by roster operations and roster services.
#[derive(Debug)]
pub enum RosterError {
    Validation(AgentValidationError),
    DuplicateId(AgentId),
    Storage(RepoError),
    Session(SessionError),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid agent: {err}"),
            Self::DuplicateId(id) => write!(f, "agent id already in roster: {id}"),
            Self::Storage(err) => write!(f, "roster storage failed: {err}"),
            Self::Session(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RosterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::Storage(err) => Some(err),
            Self::Session(err) => Some(err),
        }
    }
}

impl From<AgentValidationError> for RosterError {
    fn from(value: AgentValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for RosterError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

impl From<SessionError> for RosterError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

/// Authoritative in-memory set of live agents.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    agents: Vec<Agent>,
}

impl RosterStore {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a roster from previously persisted agents, keeping their order.
    ///
    /// # Errors
    /// - Returns `DuplicateId` if two agents share an ID.
    /// - Returns `Validation` if any agent breaks field invariants.
    pub fn from_agents(agents: Vec<Agent>) -> RosterResult<Self> {
        let mut store = Self::new();
        for agent in agents {
            store.insert_existing(agent)?;
        }
        Ok(store)
    }

    /// Validates input and builds an agent whose ID no live agent holds.
    ///
    /// The roster is not modified; pair with `insert_existing` when the
    /// agent must be persisted elsewhere before it becomes live.
    pub fn prepare_agent(
        &self,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<Agent, AgentValidationError> {
        loop {
            let agent = Agent::new(name, email, phone)?;
            if !self.contains(agent.id) {
                return Ok(agent);
            }
        }
    }

    /// Registers a new agent and returns it.
    ///
    /// # Errors
    /// - Returns the first violated field; the roster is left unchanged.
    pub fn add_agent(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<Agent, AgentValidationError> {
        let agent = self.prepare_agent(name, email, phone)?;
        self.agents.push(agent.clone());
        info!(
            "event=agent_add module=roster status=ok agent_id={} roster_size={}",
            agent.id,
            self.agents.len()
        );
        Ok(agent)
    }

    /// Appends an already-built agent.
    ///
    /// # Errors
    /// - Returns `DuplicateId` when the ID is live; the roster is unchanged.
    pub fn insert_existing(&mut self, agent: Agent) -> RosterResult<()> {
        agent.validate()?;
        if self.contains(agent.id) {
            return Err(RosterError::DuplicateId(agent.id));
        }
        self.agents.push(agent);
        Ok(())
    }

    /// Removes the agent with `id`. Unknown IDs are a no-op.
    ///
    /// Returns whether an agent was removed.
    pub fn remove_agent(&mut self, id: AgentId) -> bool {
        let Some(index) = self.agents.iter().position(|agent| agent.id == id) else {
            debug!("event=agent_remove module=roster status=noop agent_id={id}");
            return false;
        };

        self.agents.remove(index);
        info!(
            "event=agent_remove module=roster status=ok agent_id={} roster_size={}",
            id,
            self.agents.len()
        );
        true
    }

    /// Returns an owned snapshot of the roster in insertion order.
    pub fn list_agents(&self) -> Vec<Agent> {
        self.agents.clone()
    }

    /// Borrowed read-only view, for callers that only need to look.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    pub fn contains(&self, id: AgentId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
