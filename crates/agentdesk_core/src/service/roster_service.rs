//! Roster use-case service.
//!
//! # Responsibility
//! - Keep the in-memory roster and durable storage consistent.
//! - Gate every roster use-case behind an operator `Session`.
//!
//! # Invariants
//! - Storage is written before the in-memory roster changes, so a storage
//!   failure leaves the roster untouched.
//! - Consumers only receive snapshots; the store is never shared mutably.

use crate::model::agent::{Agent, AgentId};
use crate::repo::agent_repo::AgentRepository;
use crate::roster::store::{RosterResult, RosterStore};
use crate::session::Session;
use log::{info, warn};

/// Roster service backed by an `AgentRepository`.
pub struct RosterService<R: AgentRepository> {
    repo: R,
    store: RosterStore,
}

impl<R: AgentRepository> RosterService<R> {
    /// Loads the persisted roster and wraps it with `repo`.
    ///
    /// # Errors
    /// - Returns storage errors from `load_agents`.
    /// - Returns `DuplicateId` when storage holds the same ID twice.
    pub fn load(repo: R) -> RosterResult<Self> {
        let store = RosterStore::from_agents(repo.load_agents()?)?;
        info!(
            "event=roster_load module=service status=ok roster_size={}",
            store.len()
        );
        Ok(Self { repo, store })
    }

    /// Validates, persists and registers a new agent.
    pub fn add_agent(
        &mut self,
        _session: &Session,
        name: &str,
        email: &str,
        phone: &str,
    ) -> RosterResult<Agent> {
        let agent = match self.store.prepare_agent(name, email, phone) {
            Ok(agent) => agent,
            Err(err) => {
                warn!(
                    "event=agent_add module=service status=rejected field={}",
                    err.field()
                );
                return Err(err.into());
            }
        };

        self.repo.put_agent(&agent)?;
        self.store.insert_existing(agent.clone())?;
        info!(
            "event=agent_add module=service status=ok agent_id={} roster_size={}",
            agent.id,
            self.store.len()
        );
        Ok(agent)
    }

    /// Removes an agent from storage and roster. Unknown IDs are a no-op.
    ///
    /// Returns whether the roster held the agent.
    pub fn remove_agent(&mut self, _session: &Session, id: AgentId) -> RosterResult<bool> {
        self.repo.delete_agent(id)?;
        let removed = self.store.remove_agent(id);
        info!(
            "event=agent_remove module=service status=ok agent_id={} removed={} roster_size={}",
            id,
            removed,
            self.store.len()
        );
        Ok(removed)
    }

    /// Returns the roster snapshot in insertion order.
    pub fn list_agents(&self, _session: &Session) -> Vec<Agent> {
        self.store.list_agents()
    }

    pub fn agent_count(&self) -> usize {
        self.store.len()
    }

    /// Read-only access to the underlying roster.
    pub fn store(&self) -> &RosterStore {
        &self.store
    }
}
