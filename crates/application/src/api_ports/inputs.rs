use gatecrest_domain::{
    ApiLifecycleState, Endpoint, LoggingPolicy, PlanStatus, PrimaryOwner, RoutingRule, Visibility,
};

/// Input payload for creating an API definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApiInput {
    /// Display name.
    pub name: String,
    /// Version string.
    pub version: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Identifier kept stable across environment promotion; generated when absent.
    pub cross_id: Option<String>,
    /// Routing rules.
    pub routing: Vec<RoutingRule>,
    /// Upstream endpoints.
    pub endpoints: Vec<Endpoint>,
    /// Sharding tags.
    pub tags: Vec<String>,
    /// Logging policy.
    pub logging: LoggingPolicy,
    /// Ownership hint embedded in an imported definition; may be stale.
    pub owner_hint: Option<PrimaryOwner>,
}

/// Plan reference carried by an update payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanReference {
    /// Plan identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Requested plan status.
    pub status: PlanStatus,
}

/// Input payload for updating an API definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateApiInput {
    /// Display name.
    pub name: String,
    /// Version string.
    pub version: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Portal visibility.
    pub visibility: Visibility,
    /// Requested governance state; keeps the current one when absent.
    pub api_lifecycle_state: Option<ApiLifecycleState>,
    /// Routing rules.
    pub routing: Vec<RoutingRule>,
    /// Upstream endpoints.
    pub endpoints: Vec<Endpoint>,
    /// Sharding tags.
    pub tags: Vec<String>,
    /// Logging policy.
    pub logging: LoggingPolicy,
    /// Base64 picture payload.
    pub picture: Option<String>,
    /// Plans referenced by the payload, validated when plan checking is on.
    pub plans: Option<Vec<PlanReference>>,
}
