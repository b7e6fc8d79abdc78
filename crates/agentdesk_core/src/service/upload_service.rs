//! List upload use-case service.
//!
//! # Responsibility
//! - Accept an already-parsed contact list from a supported file.
//! - Run the partition engine against a roster snapshot.
//! - Retain the latest distribution and upload counters for the dashboard.
//!
//! # Invariants
//! - A successful upload fully replaces the previous distribution.
//! - A rejected upload changes neither the distribution nor the counters.

use crate::model::agent::Agent;
use crate::model::contact::ContactRecord;
use crate::model::distribution::Distribution;
use crate::partition::engine::distribute;
use crate::session::Session;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// File extensions accepted for contact list uploads.
pub const ACCEPTED_UPLOAD_EXTENSIONS: &[&str] = &["csv", "xls", "xlsx"];

/// Returns whether `file_name` has an accepted spreadsheet extension.
///
/// Matching is case-insensitive, so `Leads.CSV` is accepted.
pub fn is_supported_upload(file_name: &str) -> bool {
    Path::new(file_name.trim())
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ACCEPTED_UPLOAD_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Upload rejection reasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// File name does not carry a `csv|xls|xlsx` extension.
    UnsupportedFile(String),
    /// Roster snapshot is empty; there is nobody to distribute to.
    NoAgents,
}

impl Display for UploadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFile(name) => write!(
                f,
                "unsupported upload file `{name}`; expected one of {}",
                ACCEPTED_UPLOAD_EXTENSIONS.join("|")
            ),
            Self::NoAgents => write!(f, "no agents available to distribute lists"),
        }
    }
}

impl Error for UploadError {}

/// Holds the latest distribution produced by an upload.
#[derive(Debug, Clone, Default)]
pub struct UploadService {
    latest: Option<Distribution>,
    lists_uploaded: u32,
}

impl UploadService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distributes `records` across the `agents` snapshot.
    ///
    /// # Errors
    /// - `UnsupportedFile` when `file_name` has no accepted extension.
    /// - `NoAgents` when `agents` is empty.
    pub fn upload(
        &mut self,
        _session: &Session,
        file_name: &str,
        records: &[ContactRecord],
        agents: &[Agent],
    ) -> Result<&Distribution, UploadError> {
        if !is_supported_upload(file_name) {
            warn!("event=list_upload module=service status=rejected reason=unsupported_file");
            return Err(UploadError::UnsupportedFile(file_name.to_string()));
        }
        if agents.is_empty() {
            warn!("event=list_upload module=service status=rejected reason=no_agents");
            return Err(UploadError::NoAgents);
        }

        let distribution = distribute(records, agents);
        self.lists_uploaded += 1;
        info!(
            "event=list_upload module=service status=ok records={} agents={} lists_uploaded={}",
            records.len(),
            distribution.len(),
            self.lists_uploaded
        );
        Ok(&*self.latest.insert(distribution))
    }

    /// Latest distribution, if any upload has succeeded.
    pub fn latest(&self) -> Option<&Distribution> {
        self.latest.as_ref()
    }

    /// Number of successful uploads since this service was created.
    pub fn lists_uploaded(&self) -> u32 {
        self.lists_uploaded
    }
}
