//! Ports consumed by the API service and its components.

mod audit;
mod directory;
mod events;
mod inputs;
mod membership;
mod notifier;
mod plans;
mod repository;

pub use audit::{AuditEntry, AuditSink};
pub use directory::GroupUserDirectory;
pub use events::{DeploymentEvent, EventStore, event_properties};
pub use inputs::{NewApiInput, PlanReference, UpdateApiInput};
pub use membership::MembershipDirectory;
pub use notifier::{ApiHook, Notifier};
pub use plans::PlanRegistry;
pub use repository::ApiRepository;
