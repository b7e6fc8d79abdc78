//! Agent domain model.
//!
//! # Responsibility
//! - Define the canonical record for one registered field agent.
//! - Validate operator-supplied contact fields before an agent exists.
//!
//! # Invariants
//! - `id` is stable and never reused for another agent.
//! - `name`, `email` and `phone` are non-empty once an `Agent` is built.
//! - `created_at` is stamped once and never changes.

use chrono::{DateTime, SubsecRound, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a registered agent.
pub type AgentId = Uuid;

/// Minimum number of characters accepted for an agent phone number.
pub const MIN_PHONE_CHARS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

/// Operator-editable agent field, used to point validation errors at input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentField {
    Id,
    Name,
    Email,
    Phone,
}

impl AgentField {
    /// Stable field name used in messages and wire payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl Display for AgentField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure for agent input. Only the first violation is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentValidationError {
    NilId,
    EmptyField(AgentField),
    InvalidEmail(String),
    PhoneTooShort { min: usize, actual: usize },
}

impl AgentValidationError {
    /// Field that caused the rejection.
    pub fn field(&self) -> AgentField {
        match self {
            Self::NilId => AgentField::Id,
            Self::EmptyField(field) => *field,
            Self::InvalidEmail(_) => AgentField::Email,
            Self::PhoneTooShort { .. } => AgentField::Phone,
        }
    }

    /// Human-readable reason, without the field name.
    pub fn reason(&self) -> String {
        match self {
            Self::NilId => "must not be the nil uuid".to_string(),
            Self::EmptyField(_) => "is required".to_string(),
            Self::InvalidEmail(value) => format!("`{value}` is not a valid email address"),
            Self::PhoneTooShort { min, actual } => {
                format!("must have at least {min} characters, got {actual}")
            }
        }
    }
}

impl Display for AgentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field(), self.reason())
    }
}

impl Error for AgentValidationError {}

/// Canonical record for one registered agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Generated at creation; never reassigned.
    pub id: AgentId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Millisecond precision so storage round trips compare equal.
    pub created_at: DateTime<Utc>,
}

impl Agent {
    /// Validates input and creates an agent with a fresh ID and timestamp.
    ///
    /// Surrounding whitespace is trimmed before validation and storage.
    ///
    /// # Errors
    /// - Returns the first violated field in order `name`, `email`, `phone`.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, AgentValidationError> {
        Self::with_id(
            Uuid::new_v4(),
            name,
            email,
            phone,
            Utc::now().trunc_subsecs(3),
        )
    }

    /// Rebuilds an agent whose identity already exists, e.g. from storage.
    ///
    /// # Errors
    /// - Rejects the nil UUID and any field-level violation.
    pub fn with_id(
        id: AgentId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, AgentValidationError> {
        let agent = Self {
            id,
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            phone: phone.into().trim().to_string(),
            created_at,
        };
        agent.validate()?;
        Ok(agent)
    }

    /// Checks identity and field invariants.
    pub fn validate(&self) -> Result<(), AgentValidationError> {
        if self.id.is_nil() {
            return Err(AgentValidationError::NilId);
        }
        validate_fields(&self.name, &self.email, &self.phone)
    }
}

/// Validates raw agent fields without building an agent.
///
/// Presence is checked for every field before format rules, so an empty name
/// is reported even when the email is also malformed.
pub fn validate_fields(name: &str, email: &str, phone: &str) -> Result<(), AgentValidationError> {
    for (field, value) in [
        (AgentField::Name, name),
        (AgentField::Email, email),
        (AgentField::Phone, phone),
    ] {
        if value.trim().is_empty() {
            return Err(AgentValidationError::EmptyField(field));
        }
    }

    let email = email.trim();
    if !EMAIL_PATTERN.is_match(email) {
        return Err(AgentValidationError::InvalidEmail(email.to_string()));
    }

    let actual = phone.trim().chars().count();
    if actual < MIN_PHONE_CHARS {
        return Err(AgentValidationError::PhoneTooShort {
            min: MIN_PHONE_CHARS,
            actual,
        });
    }

    Ok(())
}
