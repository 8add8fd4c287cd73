use async_trait::async_trait;
use gatecrest_application::{DeploymentEvent, EventStore, event_properties};
use gatecrest_core::AppResult;
use gatecrest_domain::DeploymentEventType;
use tokio::sync::RwLock;

/// In-memory append-only deployment event store implementation.
///
/// Append order is creation order; queries rely on it instead of sorting.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<DeploymentEvent>>,
}

impl InMemoryEventStore {
    /// Creates an empty in-memory event store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn append(&self, event: DeploymentEvent) -> AppResult<DeploymentEvent> {
        self.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn latest_by_api(
        &self,
        api_id: &str,
        types: &[DeploymentEventType],
    ) -> AppResult<Option<DeploymentEvent>> {
        Ok(self
            .events
            .read()
            .await
            .iter()
            .filter(|event| {
                types.contains(&event.event_type)
                    && event.property(event_properties::API_ID) == Some(api_id)
            })
            .next_back()
            .cloned())
    }

    async fn list_by_api(&self, api_id: &str) -> AppResult<Vec<DeploymentEvent>> {
        Ok(self
            .events
            .read()
            .await
            .iter()
            .filter(|event| event.property(event_properties::API_ID) == Some(api_id))
            .cloned()
            .collect())
    }

    async fn delete_by_api(&self, api_id: &str) -> AppResult<()> {
        self.events
            .write()
            .await
            .retain(|event| event.property(event_properties::API_ID) != Some(api_id));
        Ok(())
    }
}
