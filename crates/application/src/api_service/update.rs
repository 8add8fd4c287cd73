use chrono::Utc;
use gatecrest_domain::{ApiDefinition, AuditAction, PlanStatus, check_lifecycle_transition};

use super::*;
use crate::{PlanReference, UpdateApiInput};

impl ApiService {
    /// Applies an update payload to an existing API definition.
    ///
    /// Immutable fields (identifier, cross id, environment, runtime state,
    /// workflow state, timestamps of record) are preserved from the stored
    /// definition; the requested governance state is validated against the
    /// current one before anything is written.
    pub async fn update(
        &self,
        api_id: &str,
        input: UpdateApiInput,
        check_plans: bool,
        user_id: &str,
    ) -> AppResult<ApiDefinition> {
        let current = self.require_api(api_id).await?;

        let requested = input
            .api_lifecycle_state
            .unwrap_or(current.api_lifecycle_state);
        check_lifecycle_transition(
            current.api_lifecycle_state,
            requested,
            current.workflow_state,
        )?;

        if check_plans && let Some(references) = input.plans.as_deref() {
            self.check_plan_statuses(api_id, references).await?;
        }

        let mut updated = current.clone();
        updated.name = input.name;
        updated.version = input.version;
        updated.description = input.description;
        updated.visibility = input.visibility;
        updated.api_lifecycle_state = requested;
        updated.routing = input.routing;
        updated.endpoints = input.endpoints;
        updated.tags = input.tags;
        updated.logging = input.logging;
        updated.picture = input.picture;
        updated.updated_at = Utc::now();
        updated.validate()?;

        let stored = self.repository.update(updated).await?;

        self.record_audit(AuditEntry {
            api_id: api_id.to_owned(),
            actor: user_id.to_owned(),
            action: AuditAction::ApiUpdated,
            before: Some(current),
            after: Some(stored.clone()),
        })
        .await;
        self.notify(ApiHook::ApiUpdated, api_id, &stored.name).await;

        Ok(stored)
    }

    /// Restores an API definition from a previous deployment snapshot.
    ///
    /// Rollback is an audited update: the restored payload flows through the
    /// regular update path, so lifecycle guards and validation still apply
    /// and the rollback itself does not touch the gateways until the next
    /// deploy.
    pub async fn rollback(
        &self,
        api_id: &str,
        input: UpdateApiInput,
        user_id: &str,
    ) -> AppResult<ApiDefinition> {
        let before = self.require_api(api_id).await?;

        self.record_audit(AuditEntry {
            api_id: api_id.to_owned(),
            actor: user_id.to_owned(),
            action: AuditAction::ApiRollbacked,
            before: Some(before),
            after: None,
        })
        .await;

        self.update(api_id, input, false, user_id).await
    }

    async fn check_plan_statuses(
        &self,
        api_id: &str,
        references: &[PlanReference],
    ) -> AppResult<()> {
        let plans = self.plan_registry.find_by_api(api_id).await?;

        for reference in references {
            let plan = plans
                .iter()
                .find(|plan| plan.id == reference.id)
                .ok_or_else(|| {
                    AppError::Validation(format!(
                        "plan '{}' does not belong to api '{api_id}'",
                        reference.name
                    ))
                })?;

            // A closed plan can never be reopened through an update payload.
            if plan.status == PlanStatus::Closed && reference.status != PlanStatus::Closed {
                return Err(AppError::Validation(format!(
                    "invalid status for plan '{}'",
                    reference.name
                )));
            }
        }

        Ok(())
    }
}
