use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use gatecrest_core::{AppError, AppResult, EnvironmentId};
use serde::{Deserialize, Serialize};

/// Portal visibility of an API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Visible to every portal user.
    Public,
    /// Visible to members only.
    Private,
}

/// Runtime state of an API on the gateways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// Traffic is accepted.
    Started,
    /// Traffic is refused.
    Stopped,
}

/// Governance state of an API definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiLifecycleState {
    /// Freshly created, never published.
    Created,
    /// Published to the portal.
    Published,
    /// Withdrawn from the portal after a publication.
    Unpublished,
    /// Kept running for existing consumers, closed to lifecycle edits.
    Deprecated,
    /// Terminal archived state.
    Archived,
}

impl ApiLifecycleState {
    /// Returns a stable storage value for this state.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Published => "published",
            Self::Unpublished => "unpublished",
            Self::Deprecated => "deprecated",
            Self::Archived => "archived",
        }
    }
}

/// Review workflow state paired with the governance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowState {
    /// Draft waiting for a review request.
    Draft,
    /// Review requested, definition frozen.
    InReview,
    /// Review accepted.
    ReviewOk,
    /// Reviewer asked for changes.
    RequestForChanges,
}

/// Logging behavior applied by the gateways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggingMode {
    /// No request logging.
    None,
    /// Log client requests only.
    Client,
    /// Log upstream requests only.
    Proxy,
    /// Log both sides.
    ClientProxy,
}

impl Default for LoggingMode {
    fn default() -> Self {
        Self::None
    }
}

/// Logging policy attached to an API definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingPolicy {
    /// Logging mode.
    #[serde(default)]
    pub mode: LoggingMode,
    /// Optional logging condition expression.
    #[serde(default)]
    pub condition: Option<String>,
}

/// One routing rule of an API definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingRule {
    /// Request path the rule applies to.
    pub path: String,
    /// Policy identifier executed for matching requests.
    pub policy: String,
    /// Free-text operator note; never affects runtime behavior.
    #[serde(default)]
    pub description: Option<String>,
    /// Enabled flag.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

/// One upstream endpoint of an API definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Unique endpoint name.
    pub name: String,
    /// Upstream target URL.
    pub target: String,
}

/// Versioned API configuration owned by the API service.
///
/// Snapshots of this struct are serialized into deployment events; unknown
/// fields are ignored and absent fields fall back to defaults so historical
/// snapshots stay readable across schema growth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDefinition {
    /// Stable immutable identifier.
    pub id: String,
    /// Identifier kept stable across environment promotion.
    #[serde(default)]
    pub cross_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Version string.
    pub version: String,
    /// Owning environment.
    pub environment_id: EnvironmentId,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Portal visibility.
    pub visibility: Visibility,
    /// Runtime state.
    pub lifecycle_state: LifecycleState,
    /// Governance state.
    pub api_lifecycle_state: ApiLifecycleState,
    /// Review workflow state, when review is enabled.
    #[serde(default)]
    pub workflow_state: Option<WorkflowState>,
    /// Routing rules.
    #[serde(default)]
    pub routing: Vec<RoutingRule>,
    /// Upstream endpoints.
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
    /// Sharding tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Logging policy.
    #[serde(default)]
    pub logging: LoggingPolicy,
    /// Base64 picture payload; stripped from event snapshots.
    #[serde(default)]
    pub picture: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last mutation time.
    pub updated_at: DateTime<Utc>,
    /// Last successful push to the gateways, when any.
    #[serde(default)]
    pub deployed_at: Option<DateTime<Utc>>,
}

/// Deployment-relevant projection of an [`ApiDefinition`].
///
/// Two definitions with equal projections produce identical gateway behavior;
/// cosmetic fields (name, descriptions, picture, timestamps, governance and
/// workflow states) are excluded on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparableDefinition {
    version: String,
    visibility: Visibility,
    routing: Vec<RoutingRule>,
    endpoints: Vec<Endpoint>,
    tags: Vec<String>,
    logging: LoggingPolicy,
}

impl ApiDefinition {
    /// Validates structural invariants before any write.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(
                "api name must not be empty".to_owned(),
            ));
        }

        if self.version.trim().is_empty() {
            return Err(AppError::Validation(
                "api version must not be empty".to_owned(),
            ));
        }

        if self.endpoints.is_empty() {
            return Err(AppError::Validation(format!(
                "api '{}' requires at least one endpoint",
                self.id
            )));
        }

        let mut endpoint_names = BTreeSet::new();
        for endpoint in &self.endpoints {
            if endpoint.name.contains(':') {
                return Err(AppError::Validation(format!(
                    "endpoint name '{}' must not contain ':'",
                    endpoint.name
                )));
            }

            if !endpoint_names.insert(endpoint.name.as_str()) {
                return Err(AppError::Validation(format!(
                    "duplicate endpoint name '{}'",
                    endpoint.name
                )));
            }
        }

        for rule in &self.routing {
            if rule.path.trim().is_empty() {
                return Err(AppError::Validation(
                    "routing rule path must not be empty".to_owned(),
                ));
            }
        }

        let mut tags = BTreeSet::new();
        for tag in &self.tags {
            if !tags.insert(tag.as_str()) {
                return Err(AppError::Validation(format!("duplicate tag '{tag}'")));
            }
        }

        Ok(())
    }

    /// Returns the deployment-relevant projection with rule descriptions cleared.
    #[must_use]
    pub fn comparable(&self) -> ComparableDefinition {
        let routing = self
            .routing
            .iter()
            .cloned()
            .map(|mut rule| {
                rule.description = None;
                rule
            })
            .collect();

        ComparableDefinition {
            version: self.version.clone(),
            visibility: self.visibility,
            routing,
            endpoints: self.endpoints.clone(),
            tags: self.tags.clone(),
            logging: self.logging.clone(),
        }
    }

    /// Clears the picture payload before the definition is snapshotted.
    pub fn strip_picture(&mut self) {
        self.picture = None;
    }
}
