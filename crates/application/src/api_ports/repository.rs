use async_trait::async_trait;
use gatecrest_core::{AppResult, EnvironmentId};
use gatecrest_domain::ApiDefinition;

/// Repository port for API definitions.
#[async_trait]
pub trait ApiRepository: Send + Sync {
    /// Returns one API definition by identifier.
    async fn find_by_id(&self, api_id: &str) -> AppResult<Option<ApiDefinition>>;

    /// Lists API definitions for an environment.
    async fn list_by_environment(
        &self,
        environment_id: EnvironmentId,
    ) -> AppResult<Vec<ApiDefinition>>;

    /// Persists a new API definition.
    async fn create(&self, api: ApiDefinition) -> AppResult<ApiDefinition>;

    /// Replaces an existing API definition.
    async fn update(&self, api: ApiDefinition) -> AppResult<ApiDefinition>;

    /// Deletes one API definition.
    async fn delete(&self, api_id: &str) -> AppResult<()>;
}
