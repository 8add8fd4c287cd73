//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod api;
mod audit;
mod event;
mod lifecycle;
mod ownership;
mod plan;

pub use api::{
    ApiDefinition, ApiLifecycleState, ComparableDefinition, Endpoint, LifecycleState, LoggingMode,
    LoggingPolicy, RoutingRule, Visibility, WorkflowState,
};
pub use audit::AuditAction;
pub use event::DeploymentEventType;
pub use lifecycle::check_lifecycle_transition;
pub use ownership::{ApiPrimaryOwnerMode, PrimaryOwner};
pub use plan::{Plan, PlanStatus};
