//! Distribution result model.
//!
//! # Responsibility
//! - Hold one immutable partition of a record list across an agent snapshot.
//!
//! # Invariants
//! - Groups keep roster order; items keep input order.
//! - Concatenating group items in order reproduces the input list.
//! - Groups copy agent identity and name; they never borrow live agents.

use crate::model::agent::AgentId;
use crate::model::contact::ContactRecord;
use serde::Serialize;

/// Records assigned to one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentGroup {
    pub agent_id: AgentId,
    /// Name as it was when the distribution was produced.
    pub agent_name: String,
    pub items: Vec<ContactRecord>,
}

impl AgentGroup {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Immutable result of partitioning one record list.
///
/// Only the partition engine builds non-empty distributions, so the
/// order-preservation invariant cannot be broken by callers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Distribution {
    groups: Vec<AgentGroup>,
}

impl Distribution {
    pub(crate) fn from_groups(groups: Vec<AgentGroup>) -> Self {
        Self { groups }
    }

    /// Creates a distribution without groups (no agents were available).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[AgentGroup] {
        &self.groups
    }

    /// Number of groups, equal to the agent count of the snapshot.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Item count per group, in group order.
    pub fn group_sizes(&self) -> Vec<usize> {
        self.groups.iter().map(AgentGroup::len).collect()
    }

    /// Total number of records across all groups.
    pub fn total_items(&self) -> usize {
        self.groups.iter().map(AgentGroup::len).sum()
    }

    pub fn group_for(&self, agent_id: AgentId) -> Option<&AgentGroup> {
        self.groups.iter().find(|group| group.agent_id == agent_id)
    }

    /// Concatenates all groups back into the original record order.
    pub fn into_records(self) -> Vec<ContactRecord> {
        self.groups
            .into_iter()
            .flat_map(|group| group.items)
            .collect()
    }
}
