//! Dashboard counters derived from roster and upload services.

use crate::repo::agent_repo::AgentRepository;
use crate::service::roster_service::RosterService;
use crate::service::upload_service::UploadService;
use serde::Serialize;

/// Headline numbers shown on the operator dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_agents: usize,
    pub lists_uploaded: u32,
}

pub fn dashboard_stats<R: AgentRepository>(
    roster: &RosterService<R>,
    uploads: &UploadService,
) -> DashboardStats {
    DashboardStats {
        total_agents: roster.agent_count(),
        lists_uploaded: uploads.lists_uploaded(),
    }
}
