use async_trait::async_trait;
use gatecrest_core::AppResult;

/// Notification hook types raised by API operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiHook {
    /// API definition created.
    ApiCreated,
    /// API definition updated.
    ApiUpdated,
    /// Definition pushed to or withdrawn from the gateways.
    ApiDeployed,
    /// Runtime state flipped to started.
    ApiStarted,
    /// Runtime state flipped to stopped.
    ApiStopped,
}

impl ApiHook {
    /// Returns a stable hook identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiCreated => "api.created",
            Self::ApiUpdated => "api.updated",
            Self::ApiDeployed => "api.deployed",
            Self::ApiStarted => "api.started",
            Self::ApiStopped => "api.stopped",
        }
    }
}

/// Port for the best-effort notification channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Triggers one notification hook; failures are logged by the caller,
    /// never propagated.
    async fn trigger(&self, hook: ApiHook, api_id: &str, message: &str) -> AppResult<()>;
}
