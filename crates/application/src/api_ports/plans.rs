use async_trait::async_trait;
use gatecrest_core::AppResult;
use gatecrest_domain::Plan;

/// Port for the plan registry attached to each API.
#[async_trait]
pub trait PlanRegistry: Send + Sync {
    /// Lists plans for an API.
    async fn find_by_api(&self, api_id: &str) -> AppResult<Vec<Plan>>;

    /// Removes every plan of an API.
    async fn delete_by_api(&self, api_id: &str) -> AppResult<()>;
}
