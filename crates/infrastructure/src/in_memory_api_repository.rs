use std::collections::HashMap;

use async_trait::async_trait;
use gatecrest_application::ApiRepository;
use gatecrest_core::{AppError, AppResult, EnvironmentId};
use gatecrest_domain::ApiDefinition;
use tokio::sync::RwLock;

/// In-memory API definition repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryApiRepository {
    apis: RwLock<HashMap<String, ApiDefinition>>,
}

impl InMemoryApiRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            apis: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ApiRepository for InMemoryApiRepository {
    async fn find_by_id(&self, api_id: &str) -> AppResult<Option<ApiDefinition>> {
        Ok(self.apis.read().await.get(api_id).cloned())
    }

    async fn list_by_environment(
        &self,
        environment_id: EnvironmentId,
    ) -> AppResult<Vec<ApiDefinition>> {
        let apis = self.apis.read().await;

        let mut listed: Vec<ApiDefinition> = apis
            .values()
            .filter(|api| api.environment_id == environment_id)
            .cloned()
            .collect();
        listed.sort_by(|left, right| left.name.cmp(&right.name));

        Ok(listed)
    }

    async fn create(&self, api: ApiDefinition) -> AppResult<ApiDefinition> {
        let mut apis = self.apis.write().await;

        if apis.contains_key(&api.id) {
            return Err(AppError::Conflict(format!(
                "api '{}' already exists",
                api.id
            )));
        }

        apis.insert(api.id.clone(), api.clone());
        Ok(api)
    }

    async fn update(&self, api: ApiDefinition) -> AppResult<ApiDefinition> {
        let mut apis = self.apis.write().await;

        if !apis.contains_key(&api.id) {
            return Err(AppError::NotFound(format!("api '{}' does not exist", api.id)));
        }

        apis.insert(api.id.clone(), api.clone());
        Ok(api)
    }

    async fn delete(&self, api_id: &str) -> AppResult<()> {
        self.apis
            .write()
            .await
            .remove(api_id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("api '{api_id}' does not exist")))
    }
}
