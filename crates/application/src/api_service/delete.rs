use gatecrest_domain::{AuditAction, LifecycleState, PlanStatus};

use super::*;

impl ApiService {
    /// Deletes an API and everything attached to it.
    ///
    /// The API must be stopped and carry no published plan. Plans and the
    /// event history are removed first, then a final payload-less unpublish
    /// marker is appended so gateways still learn the definition is gone.
    pub async fn delete(&self, api_id: &str, user_id: &str) -> AppResult<()> {
        let api = self.require_api(api_id).await?;

        if api.lifecycle_state == LifecycleState::Started {
            return Err(AppError::Conflict(format!(
                "api '{api_id}' must be stopped before deletion"
            )));
        }

        let plans = self.plan_registry.find_by_api(api_id).await?;
        let published: Vec<&str> = plans
            .iter()
            .filter(|plan| plan.status == PlanStatus::Published)
            .map(|plan| plan.name.as_str())
            .collect();
        if !published.is_empty() {
            return Err(AppError::Validation(format!(
                "plan(s) [{}] must be closed before deleting api '{api_id}'",
                published.join(", ")
            )));
        }

        self.plan_registry.delete_by_api(api_id).await?;
        self.deployment_log.purge(api_id).await?;
        self.deployment_log
            .append_unpublish_marker(api_id, user_id)
            .await?;
        self.repository.delete(api_id).await?;
        self.membership.delete_reference(api_id).await?;

        self.record_audit(AuditEntry {
            api_id: api_id.to_owned(),
            actor: user_id.to_owned(),
            action: AuditAction::ApiDeleted,
            before: Some(api),
            after: None,
        })
        .await;

        Ok(())
    }
}
