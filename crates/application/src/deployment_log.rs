use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Utc;
use gatecrest_core::{AppError, AppResult};
use gatecrest_domain::{ApiDefinition, DeploymentEventType};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{DeploymentEvent, EventStore, event_properties};

/// Append-only deployment event log with per-api deployment numbering.
///
/// Publish events carry a monotonically increasing decimal counter computed
/// from the previous publish event. The read-increment-append sequence runs
/// under a per-api mutex so two concurrent deploys never observe the same
/// last number. The counter is observational; it is never used for
/// concurrency control.
#[derive(Clone)]
pub struct DeploymentLog {
    store: Arc<dyn EventStore>,
    api_locks: Arc<Mutex<HashMap<String, Arc<Mutex<()>>>>>,
}

impl DeploymentLog {
    /// Creates a deployment log over an event store implementation.
    #[must_use]
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self {
            store,
            api_locks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Appends one event carrying a definition snapshot.
    ///
    /// The snapshot is serialized with the picture payload stripped to keep
    /// history compact.
    pub async fn append_snapshot(
        &self,
        api_id: &str,
        event_type: DeploymentEventType,
        snapshot: &ApiDefinition,
        actor: &str,
        label: Option<&str>,
    ) -> AppResult<DeploymentEvent> {
        let lock = self.lock_for(api_id).await;
        let _guard = lock.lock().await;

        let mut properties = BTreeMap::new();
        properties.insert(event_properties::API_ID.to_owned(), api_id.to_owned());
        properties.insert(event_properties::USER.to_owned(), actor.to_owned());

        if event_type == DeploymentEventType::PublishApi {
            let last_number = self
                .store
                .latest_by_api(api_id, &[DeploymentEventType::PublishApi])
                .await?
                .and_then(|event| {
                    event
                        .property(event_properties::DEPLOYMENT_NUMBER)
                        .map(ToOwned::to_owned)
                })
                .unwrap_or_else(|| "0".to_owned());
            let next_number = last_number.parse::<u64>().unwrap_or(0) + 1;
            properties.insert(
                event_properties::DEPLOYMENT_NUMBER.to_owned(),
                next_number.to_string(),
            );

            if let Some(label) = label.filter(|label| !label.trim().is_empty()) {
                properties.insert(
                    event_properties::DEPLOYMENT_LABEL.to_owned(),
                    label.to_owned(),
                );
            }
        }

        let mut snapshot = snapshot.clone();
        snapshot.strip_picture();
        let payload = serde_json::to_string(&snapshot).map_err(|error| {
            AppError::Internal(format!(
                "failed to serialize deployment snapshot for api '{api_id}': {error}"
            ))
        })?;

        self.store
            .append(DeploymentEvent {
                id: Uuid::new_v4().to_string(),
                event_type,
                created_at: Utc::now(),
                payload: Some(payload),
                properties,
            })
            .await
    }

    /// Appends a payload-less unpublish marker, used when an API is deleted
    /// so gateways learn the definition is gone.
    pub async fn append_unpublish_marker(
        &self,
        api_id: &str,
        actor: &str,
    ) -> AppResult<DeploymentEvent> {
        let mut properties = BTreeMap::new();
        properties.insert(event_properties::API_ID.to_owned(), api_id.to_owned());
        properties.insert(event_properties::USER.to_owned(), actor.to_owned());

        self.store
            .append(DeploymentEvent {
                id: Uuid::new_v4().to_string(),
                event_type: DeploymentEventType::UnpublishApi,
                created_at: Utc::now(),
                payload: None,
                properties,
            })
            .await
    }

    /// Returns the most recent publish or unpublish event for an API.
    pub async fn latest_deployment(&self, api_id: &str) -> AppResult<Option<DeploymentEvent>> {
        self.store
            .latest_by_api(
                api_id,
                &[
                    DeploymentEventType::PublishApi,
                    DeploymentEventType::UnpublishApi,
                ],
            )
            .await
    }

    /// Returns the most recent publish event for an API.
    pub async fn latest_publish(&self, api_id: &str) -> AppResult<Option<DeploymentEvent>> {
        self.store
            .latest_by_api(api_id, &[DeploymentEventType::PublishApi])
            .await
    }

    /// Lists the full event history for an API.
    pub async fn history(&self, api_id: &str) -> AppResult<Vec<DeploymentEvent>> {
        self.store.list_by_api(api_id).await
    }

    /// Removes every event for an API as part of whole-api deletion.
    pub async fn purge(&self, api_id: &str) -> AppResult<()> {
        self.store.delete_by_api(api_id).await?;
        self.api_locks.lock().await.remove(api_id);
        Ok(())
    }

    async fn lock_for(&self, api_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.api_locks.lock().await;
        locks
            .entry(api_id.to_owned())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
