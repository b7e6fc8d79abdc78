//! Operator session gate.
//!
//! # Responsibility
//! - Turn a presented session token into an explicit `Session` value.
//! - Give protected entry points a parameter they cannot be called without.
//!
//! # Invariants
//! - A `Session` only exists after a non-blank token was presented.
//! - Token contents are never logged.

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Proof that a session token was presented.
///
/// Token authenticity is checked by the external auth collaborator; core
/// only gates on presence.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    /// Opens a session from an optional token.
    ///
    /// # Errors
    /// - Returns `SessionError::MissingToken` when the token is absent or blank.
    pub fn from_token(token: Option<&str>) -> Result<Self, SessionError> {
        match token.map(str::trim) {
            Some(value) if !value.is_empty() => Ok(Self {
                token: value.to_string(),
            }),
            _ => Err(SessionError::MissingToken),
        }
    }

    /// Raw token, for forwarding to collaborators that need it.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Session gate errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    MissingToken,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingToken => write!(f, "session token is required"),
        }
    }
}

impl Error for SessionError {}
