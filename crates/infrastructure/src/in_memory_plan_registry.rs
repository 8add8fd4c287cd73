use async_trait::async_trait;
use gatecrest_application::PlanRegistry;
use gatecrest_core::AppResult;
use gatecrest_domain::Plan;
use tokio::sync::RwLock;

/// In-memory plan registry implementation.
#[derive(Debug, Default)]
pub struct InMemoryPlanRegistry {
    plans: RwLock<Vec<Plan>>,
}

impl InMemoryPlanRegistry {
    /// Creates an empty in-memory plan registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            plans: RwLock::new(Vec::new()),
        }
    }

    /// Inserts a plan, replacing any stored plan with the same identifier.
    pub async fn save_plan(&self, plan: Plan) {
        let mut plans = self.plans.write().await;
        plans.retain(|stored| stored.id != plan.id);
        plans.push(plan);
    }
}

#[async_trait]
impl PlanRegistry for InMemoryPlanRegistry {
    async fn find_by_api(&self, api_id: &str) -> AppResult<Vec<Plan>> {
        Ok(self
            .plans
            .read()
            .await
            .iter()
            .filter(|plan| plan.api_id == api_id)
            .cloned()
            .collect())
    }

    async fn delete_by_api(&self, api_id: &str) -> AppResult<()> {
        self.plans.write().await.retain(|plan| plan.api_id != api_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gatecrest_application::PlanRegistry;
    use gatecrest_domain::{Plan, PlanStatus};

    use super::InMemoryPlanRegistry;

    fn plan(plan_id: &str, api_id: &str) -> Plan {
        Plan {
            id: plan_id.to_owned(),
            api_id: api_id.to_owned(),
            name: "Gold".to_owned(),
            status: PlanStatus::Published,
            need_redeploy_at: None,
        }
    }

    #[tokio::test]
    async fn save_replaces_plan_with_same_identifier() {
        let registry = InMemoryPlanRegistry::new();
        registry.save_plan(plan("p1", "a1")).await;

        let mut replacement = plan("p1", "a1");
        replacement.status = PlanStatus::Closed;
        registry.save_plan(replacement).await;

        let plans = registry.find_by_api("a1").await;
        assert_eq!(
            plans.ok().map(|plans| plans
                .iter()
                .map(|plan| plan.status)
                .collect::<Vec<_>>()),
            Some(vec![PlanStatus::Closed])
        );
    }

    #[tokio::test]
    async fn delete_by_api_is_scoped() {
        let registry = InMemoryPlanRegistry::new();
        registry.save_plan(plan("p1", "a1")).await;
        registry.save_plan(plan("p2", "a2")).await;

        let deleted = registry.delete_by_api("a1").await;
        assert!(deleted.is_ok());

        assert_eq!(
            registry.find_by_api("a1").await.map(|plans| plans.len()).ok(),
            Some(0)
        );
        assert_eq!(
            registry.find_by_api("a2").await.map(|plans| plans.len()).ok(),
            Some(1)
        );
    }
}
