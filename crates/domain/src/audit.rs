use serde::{Deserialize, Serialize};

/// Stable identifiers for audited API changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Emitted when an API definition is created.
    ApiCreated,
    /// Emitted when an API definition is updated.
    ApiUpdated,
    /// Emitted when an API definition is deleted.
    ApiDeleted,
    /// Emitted when an API definition is restored from a previous snapshot.
    ApiRollbacked,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiCreated => "api.created",
            Self::ApiUpdated => "api.updated",
            Self::ApiDeleted => "api.deleted",
            Self::ApiRollbacked => "api.rollbacked",
        }
    }
}
