//! Contact record model.
//!
//! Records arrive already parsed from an uploaded list. Core never inspects
//! field semantics; only the position of a record in its list matters.

use serde::{Deserialize, Serialize};

/// One row of an uploaded contact list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactRecord {
    pub first_name: String,
    pub phone: String,
    pub notes: String,
}

impl ContactRecord {
    pub fn new(
        first_name: impl Into<String>,
        phone: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            phone: phone.into(),
            notes: notes.into(),
        }
    }
}
