use std::sync::Arc;

use gatecrest_core::{AppError, AppResult};
use gatecrest_domain::{ApiDefinition, ApiPrimaryOwnerMode, PrimaryOwner};
use tracing::warn;

use crate::{
    ApiHook, ApiRepository, AuditEntry, AuditSink, DeploymentEvent, DeploymentLog, EventStore,
    GroupUserDirectory, MembershipDirectory, Notifier, OwnershipResolver, PlanRegistry,
    SynchronizationChecker,
};

mod create;
mod delete;
mod deploy;
mod runtime;
mod update;

/// Environment-wide options for the API service.
#[derive(Debug, Clone, Copy)]
pub struct ApiServiceConfig {
    /// Policy for resolving the primary owner of new APIs.
    pub primary_owner_mode: ApiPrimaryOwnerMode,
    /// Whether new APIs enter the review workflow.
    pub review_enabled: bool,
}

/// Application service orchestrating API lifecycle and deployment operations.
#[derive(Clone)]
pub struct ApiService {
    config: ApiServiceConfig,
    repository: Arc<dyn ApiRepository>,
    deployment_log: DeploymentLog,
    synchronization: SynchronizationChecker,
    ownership_resolver: OwnershipResolver,
    membership: Arc<dyn MembershipDirectory>,
    plan_registry: Arc<dyn PlanRegistry>,
    audit: Arc<dyn AuditSink>,
    notifier: Arc<dyn Notifier>,
}

impl ApiService {
    /// Creates an API service from port implementations.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: ApiServiceConfig,
        repository: Arc<dyn ApiRepository>,
        events: Arc<dyn EventStore>,
        membership: Arc<dyn MembershipDirectory>,
        directory: Arc<dyn GroupUserDirectory>,
        plan_registry: Arc<dyn PlanRegistry>,
        audit: Arc<dyn AuditSink>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let deployment_log = DeploymentLog::new(events);
        let synchronization = SynchronizationChecker::new(
            Arc::clone(&repository),
            deployment_log.clone(),
            Arc::clone(&plan_registry),
        );

        Self {
            config,
            repository,
            deployment_log,
            synchronization,
            ownership_resolver: OwnershipResolver::new(directory),
            membership,
            plan_registry,
            audit,
            notifier,
        }
    }

    /// Returns one API definition by identifier.
    pub async fn find_by_id(&self, api_id: &str) -> AppResult<ApiDefinition> {
        self.require_api(api_id).await
    }

    /// Returns the primary owner recorded for an API.
    pub async fn primary_owner(&self, api_id: &str) -> AppResult<PrimaryOwner> {
        self.membership
            .primary_owner(api_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!("api '{api_id}' has no primary owner record"))
            })
    }

    /// Returns whether the last deployed snapshot matches the live definition
    /// and no plan requires a redeploy.
    pub async fn is_synchronized(&self, api_id: &str) -> bool {
        self.synchronization.is_synchronized(api_id).await
    }

    /// Lists the deployment event history of an API.
    pub async fn deployment_history(&self, api_id: &str) -> AppResult<Vec<DeploymentEvent>> {
        self.require_api(api_id).await?;
        self.deployment_log.history(api_id).await
    }

    async fn require_api(&self, api_id: &str) -> AppResult<ApiDefinition> {
        self.repository
            .find_by_id(api_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("api '{api_id}' does not exist")))
    }

    async fn record_audit(&self, entry: AuditEntry) {
        if let Err(cause) = self.audit.record(entry).await {
            warn!(error = %cause, "failed to record api audit entry");
        }
    }

    async fn notify(&self, hook: ApiHook, api_id: &str, message: &str) {
        if let Err(cause) = self.notifier.trigger(hook, api_id, message).await {
            warn!(api_id, hook = hook.as_str(), error = %cause, "api notification failed");
        }
    }
}
