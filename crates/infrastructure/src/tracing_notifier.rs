use async_trait::async_trait;
use gatecrest_application::{ApiHook, Notifier};
use gatecrest_core::AppResult;
use tracing::info;

/// Notifier implementation that emits hooks as structured log events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Creates a tracing-backed notifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn trigger(&self, hook: ApiHook, api_id: &str, message: &str) -> AppResult<()> {
        info!(api_id, hook = hook.as_str(), message, "api notification");
        Ok(())
    }
}
