//! Shared primitives for all Rust crates in Gatecrest.

#![forbid(unsafe_code)]

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Result type used across Gatecrest crates.
pub type AppResult<T> = Result<T, AppError>;

/// Environment identifier used as the partition key for every persisted resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnvironmentId(Uuid);

impl EnvironmentId {
    /// Creates a random environment identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an environment identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EnvironmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for EnvironmentId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Requested governance state change is not allowed from the current state.
    #[error("lifecycle state change to '{requested}' is not allowed")]
    LifecycleStateChangeNotAllowed {
        /// Requested target state that was rejected.
        requested: String,
    },

    /// No group with the API primary-owner role exists for the user.
    #[error("no primary-owner group available for user '{user_id}'")]
    NoPrimaryOwnerGroupForUser {
        /// User the lookup was performed for.
        user_id: String,
    },

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}
