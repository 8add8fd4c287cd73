use async_trait::async_trait;
use gatecrest_core::AppResult;
use gatecrest_domain::{ApiDefinition, AuditAction};

/// Immutable audit entry emitted by the API service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    /// API the change applies to.
    pub api_id: String,
    /// Subject that performed the change.
    pub actor: String,
    /// Stable audit action identifier.
    pub action: AuditAction,
    /// Definition before the change, when available.
    pub before: Option<ApiDefinition>,
    /// Definition after the change, when available.
    pub after: Option<ApiDefinition>,
}

/// Port for the append-only audit sink.
///
/// The sink is a best-effort side channel: callers log append failures and
/// never let them fail the main operation.
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Persists one audit entry.
    async fn record(&self, entry: AuditEntry) -> AppResult<()>;
}
