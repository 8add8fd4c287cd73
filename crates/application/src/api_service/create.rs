use chrono::Utc;
use gatecrest_core::EnvironmentId;
use gatecrest_domain::{
    ApiDefinition, ApiLifecycleState, AuditAction, LifecycleState, Visibility, WorkflowState,
};
use uuid::Uuid;

use super::*;
use crate::NewApiInput;

impl ApiService {
    /// Creates a new API definition in an environment.
    ///
    /// New APIs always start stopped, private and in the created governance
    /// state regardless of the input; the primary owner is resolved from the
    /// configured ownership mode before anything is persisted.
    pub async fn create(
        &self,
        environment_id: EnvironmentId,
        input: NewApiInput,
        user_id: &str,
    ) -> AppResult<ApiDefinition> {
        let owner = self
            .ownership_resolver
            .resolve(
                self.config.primary_owner_mode,
                input.owner_hint.as_ref(),
                user_id,
            )
            .await?;

        let now = Utc::now();
        let api = ApiDefinition {
            id: Uuid::new_v4().to_string(),
            cross_id: input.cross_id.or_else(|| Some(Uuid::new_v4().to_string())),
            name: input.name,
            version: input.version,
            environment_id,
            description: input.description,
            visibility: Visibility::Private,
            lifecycle_state: LifecycleState::Stopped,
            api_lifecycle_state: ApiLifecycleState::Created,
            workflow_state: self.config.review_enabled.then_some(WorkflowState::Draft),
            routing: input.routing,
            endpoints: input.endpoints,
            tags: input.tags,
            logging: input.logging,
            picture: None,
            created_at: now,
            updated_at: now,
            deployed_at: None,
        };
        api.validate()?;

        let created = self.repository.create(api).await?;
        self.membership.set_primary_owner(&created.id, owner).await?;

        self.record_audit(AuditEntry {
            api_id: created.id.clone(),
            actor: user_id.to_owned(),
            action: AuditAction::ApiCreated,
            before: None,
            after: Some(created.clone()),
        })
        .await;
        self.notify(ApiHook::ApiCreated, &created.id, &created.name)
            .await;

        Ok(created)
    }
}
