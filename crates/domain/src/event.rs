use serde::{Deserialize, Serialize};

/// Type of an append-only deployment event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentEventType {
    /// Definition pushed to the gateways.
    PublishApi,
    /// Definition withdrawn from the gateways.
    UnpublishApi,
    /// Running API started.
    StartApi,
    /// Running API stopped.
    StopApi,
}

impl DeploymentEventType {
    /// Returns a stable storage value for this event type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublishApi => "publish_api",
            Self::UnpublishApi => "unpublish_api",
            Self::StartApi => "start_api",
            Self::StopApi => "stop_api",
        }
    }

    /// Returns whether this event certifies or revokes a gateway deployment.
    #[must_use]
    pub fn is_deployment(&self) -> bool {
        matches!(self, Self::PublishApi | Self::UnpublishApi)
    }
}
