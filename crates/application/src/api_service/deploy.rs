use chrono::Utc;
use gatecrest_domain::{ApiDefinition, DeploymentEventType};

use super::*;

impl ApiService {
    /// Pushes the current definition to the gateways or withdraws it.
    ///
    /// Only publish and unpublish event types are accepted here; runtime
    /// start/stop events are emitted by [`ApiService::start`] and
    /// [`ApiService::stop`]. The stored definition gets a fresh deploy
    /// timestamp before its snapshot is appended to the event log.
    pub async fn deploy(
        &self,
        api_id: &str,
        event_type: DeploymentEventType,
        user_id: &str,
        label: Option<&str>,
    ) -> AppResult<ApiDefinition> {
        if !event_type.is_deployment() {
            return Err(AppError::Validation(format!(
                "'{}' is not a deployment event type",
                event_type.as_str()
            )));
        }

        let mut api = self.require_api(api_id).await?;
        let now = Utc::now();
        api.updated_at = now;
        api.deployed_at = Some(now);

        let deployed = self.repository.update(api).await?;
        self.deployment_log
            .append_snapshot(api_id, event_type, &deployed, user_id, label)
            .await?;

        self.notify(ApiHook::ApiDeployed, api_id, &deployed.name)
            .await;

        Ok(deployed)
    }
}
