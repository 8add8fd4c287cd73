//! Application services and ports for the API lifecycle subsystem.

#![forbid(unsafe_code)]

mod api_ports;
mod api_service;
mod deployment_log;
mod ownership_resolver;
mod synchronization;

pub use api_ports::{
    ApiHook, ApiRepository, AuditEntry, AuditSink, DeploymentEvent, EventStore,
    GroupUserDirectory, MembershipDirectory, NewApiInput, Notifier, PlanReference, PlanRegistry,
    UpdateApiInput, event_properties,
};
pub use api_service::{ApiService, ApiServiceConfig};
pub use deployment_log::DeploymentLog;
pub use ownership_resolver::OwnershipResolver;
pub use synchronization::SynchronizationChecker;
