use chrono::Utc;
use gatecrest_domain::{ApiDefinition, AuditAction, DeploymentEventType, LifecycleState};

use super::*;

impl ApiService {
    /// Starts an API so gateways accept traffic for it.
    pub async fn start(&self, api_id: &str, user_id: &str) -> AppResult<ApiDefinition> {
        self.change_runtime_state(api_id, LifecycleState::Started, user_id)
            .await
    }

    /// Stops an API so gateways refuse traffic for it.
    pub async fn stop(&self, api_id: &str, user_id: &str) -> AppResult<ApiDefinition> {
        self.change_runtime_state(api_id, LifecycleState::Stopped, user_id)
            .await
    }

    async fn change_runtime_state(
        &self,
        api_id: &str,
        target: LifecycleState,
        user_id: &str,
    ) -> AppResult<ApiDefinition> {
        let current = self.require_api(api_id).await?;

        // Repeating the current state is a no-op transition: it re-persists
        // the state and re-emits the runtime event.
        let mut updated = current.clone();
        updated.lifecycle_state = target;
        updated.updated_at = Utc::now();
        let stored = self.repository.update(updated).await?;

        self.record_audit(AuditEntry {
            api_id: api_id.to_owned(),
            actor: user_id.to_owned(),
            action: AuditAction::ApiUpdated,
            before: Some(current),
            after: Some(stored.clone()),
        })
        .await;

        let event_type = match target {
            LifecycleState::Started => DeploymentEventType::StartApi,
            LifecycleState::Stopped => DeploymentEventType::StopApi,
        };
        self.republish_last_snapshot(api_id, event_type, target, user_id)
            .await?;

        let hook = match target {
            LifecycleState::Started => ApiHook::ApiStarted,
            LifecycleState::Stopped => ApiHook::ApiStopped,
        };
        self.notify(hook, api_id, &stored.name).await;

        Ok(stored)
    }

    /// Re-emits the last published snapshot with the new runtime state so
    /// gateways flip traffic without picking up undeployed definition edits.
    /// An API started before its first publish gets a full deploy instead.
    async fn republish_last_snapshot(
        &self,
        api_id: &str,
        event_type: DeploymentEventType,
        target: LifecycleState,
        user_id: &str,
    ) -> AppResult<()> {
        let Some(last_publish) = self.deployment_log.latest_publish(api_id).await? else {
            self.deploy(api_id, DeploymentEventType::PublishApi, user_id, None)
                .await?;
            return Ok(());
        };

        let payload = last_publish.payload.ok_or_else(|| {
            AppError::Internal(format!("publish event for api '{api_id}' has no payload"))
        })?;
        let mut snapshot: ApiDefinition =
            serde_json::from_str(payload.as_str()).map_err(|cause| {
                AppError::Internal(format!(
                    "failed to deserialize deployed snapshot for api '{api_id}': {cause}"
                ))
            })?;

        let now = Utc::now();
        snapshot.lifecycle_state = target;
        snapshot.updated_at = now;
        snapshot.deployed_at = Some(now);

        self.deployment_log
            .append_snapshot(api_id, event_type, &snapshot, user_id, None)
            .await?;

        Ok(())
    }
}
