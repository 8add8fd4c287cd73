use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gatecrest_core::AppResult;
use gatecrest_domain::DeploymentEventType;
use serde::{Deserialize, Serialize};

/// Well-known property keys attached to deployment events.
pub mod event_properties {
    /// API the event belongs to.
    pub const API_ID: &str = "api_id";
    /// Acting user.
    pub const USER: &str = "user";
    /// Monotonically increasing per-api publish counter, stored as a decimal string.
    pub const DEPLOYMENT_NUMBER: &str = "deployment_number";
    /// Optional operator-supplied label.
    pub const DEPLOYMENT_LABEL: &str = "deployment_label";
}

/// Immutable deployment event carrying a full definition snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentEvent {
    /// Event identifier.
    pub id: String,
    /// Event type.
    pub event_type: DeploymentEventType,
    /// Emission time.
    pub created_at: DateTime<Utc>,
    /// Serialized definition snapshot; absent only for the final
    /// unpublish marker emitted on API deletion.
    pub payload: Option<String>,
    /// Free-form event properties, see [`event_properties`].
    pub properties: BTreeMap<String, String>,
}

impl DeploymentEvent {
    /// Returns a named property value.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// Append-only store port for deployment events.
///
/// Events are never mutated; `append` is the only write besides the whole-api
/// purge used by deletion.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Persists one event.
    async fn append(&self, event: DeploymentEvent) -> AppResult<DeploymentEvent>;

    /// Returns the most recent event of the given types for an API,
    /// ordered by creation time.
    async fn latest_by_api(
        &self,
        api_id: &str,
        types: &[DeploymentEventType],
    ) -> AppResult<Option<DeploymentEvent>>;

    /// Lists every event for an API ordered by creation time.
    async fn list_by_api(&self, api_id: &str) -> AppResult<Vec<DeploymentEvent>>;

    /// Removes every event for an API.
    async fn delete_by_api(&self, api_id: &str) -> AppResult<()>;
}
