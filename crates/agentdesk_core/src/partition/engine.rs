//! Contiguous-block partition engine.
//!
//! # Responsibility
//! - Assign each agent one contiguous slice of the input records.
//! - Place the remainder of an uneven split on the earliest agents.
//!
//! # Invariants
//! - Exactly one group per agent, in roster order, even when a group is empty.
//! - Group sizes differ by at most one.
//! - No record is skipped, duplicated or reordered.

use crate::model::agent::Agent;
use crate::model::contact::ContactRecord;
use crate::model::distribution::{AgentGroup, Distribution};
use log::debug;

/// Returns the number of records each of `agent_count` agents receives.
///
/// Agent `i` gets `record_count / agent_count + 1` records when
/// `i < record_count % agent_count`, otherwise the base share.
/// Returns an empty vector when `agent_count == 0`.
pub fn group_sizes(record_count: usize, agent_count: usize) -> Vec<usize> {
    if agent_count == 0 {
        return Vec::new();
    }

    let base = record_count / agent_count;
    let remainder = record_count % agent_count;
    (0..agent_count)
        .map(|index| if index < remainder { base + 1 } else { base })
        .collect()
}

/// Partitions `records` across `agents` in contiguous, near-equal blocks.
///
/// Total over its inputs: zero agents yield an empty distribution and zero
/// records yield one empty group per agent.
pub fn distribute(records: &[ContactRecord], agents: &[Agent]) -> Distribution {
    if agents.is_empty() {
        debug!(
            "event=distribute module=partition status=skipped reason=no_agents records={}",
            records.len()
        );
        return Distribution::empty();
    }

    let sizes = group_sizes(records.len(), agents.len());
    let mut offset = 0;
    let groups = agents
        .iter()
        .zip(sizes)
        .map(|(agent, size)| {
            let items = records[offset..offset + size].to_vec();
            offset += size;
            AgentGroup {
                agent_id: agent.id,
                agent_name: agent.name.clone(),
                items,
            }
        })
        .collect::<Vec<_>>();

    debug!(
        "event=distribute module=partition status=ok records={} agents={}",
        records.len(),
        agents.len()
    );
    Distribution::from_groups(groups)
}
