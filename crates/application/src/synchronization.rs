use std::sync::Arc;

use gatecrest_core::{AppError, AppResult};
use gatecrest_domain::{ApiDefinition, DeploymentEventType};
use tracing::error;

use crate::{ApiRepository, DeploymentLog, PlanRegistry};

/// Recomputes whether a gateway's last deployed configuration matches the
/// stored definition and its active plans.
///
/// Synchronization is a derived fact: the definition and any plan can change
/// independently between deploys, so the verdict is recomputed on demand from
/// the event history. The check is fail-closed — any internal fault is
/// logged and reported as "not synchronized", never as an error.
#[derive(Clone)]
pub struct SynchronizationChecker {
    repository: Arc<dyn ApiRepository>,
    deployment_log: DeploymentLog,
    plan_registry: Arc<dyn PlanRegistry>,
}

impl SynchronizationChecker {
    /// Creates a checker over the repository, event log and plan registry.
    #[must_use]
    pub fn new(
        repository: Arc<dyn ApiRepository>,
        deployment_log: DeploymentLog,
        plan_registry: Arc<dyn PlanRegistry>,
    ) -> Self {
        Self {
            repository,
            deployment_log,
            plan_registry,
        }
    }

    /// Returns whether the API's last deployed snapshot matches its live
    /// definition and no plan requires a redeploy.
    pub async fn is_synchronized(&self, api_id: &str) -> bool {
        match self.check(api_id).await {
            Ok(synchronized) => synchronized,
            Err(cause) => {
                error!(api_id, error = %cause, "synchronization check failed");
                false
            }
        }
    }

    async fn check(&self, api_id: &str) -> AppResult<bool> {
        let api = self
            .repository
            .find_by_id(api_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("api '{api_id}' does not exist")))?;

        let Some(last_event) = self.deployment_log.latest_deployment(api_id).await? else {
            // Never deployed.
            return Ok(false);
        };

        // Only a publish event can certify synchronization; a stale unpublish
        // wins over an identical earlier publish until the next explicit
        // deploy.
        if last_event.event_type == DeploymentEventType::UnpublishApi {
            return Ok(false);
        }

        let payload = last_event.payload.ok_or_else(|| {
            AppError::Internal(format!("publish event for api '{api_id}' has no payload"))
        })?;
        let deployed: ApiDefinition = serde_json::from_str(payload.as_str()).map_err(|cause| {
            AppError::Internal(format!(
                "failed to deserialize deployed snapshot for api '{api_id}': {cause}"
            ))
        })?;

        if deployed.comparable() != api.comparable() {
            return Ok(false);
        }

        let plans = self.plan_registry.find_by_api(api_id).await?;
        let plan_pending = plans
            .iter()
            .any(|plan| plan.needs_redeploy_since(api.deployed_at));

        Ok(!plan_pending)
    }
}
