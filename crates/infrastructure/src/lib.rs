//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_api_repository;
mod in_memory_audit_sink;
mod in_memory_event_store;
mod in_memory_group_user_directory;
mod in_memory_membership_directory;
mod in_memory_plan_registry;
mod tracing_notifier;

pub use in_memory_api_repository::InMemoryApiRepository;
pub use in_memory_audit_sink::InMemoryAuditSink;
pub use in_memory_event_store::InMemoryEventStore;
pub use in_memory_group_user_directory::InMemoryGroupUserDirectory;
pub use in_memory_membership_directory::InMemoryMembershipDirectory;
pub use in_memory_plan_registry::InMemoryPlanRegistry;
pub use tracing_notifier::TracingNotifier;

#[cfg(test)]
mod wiring_tests {
    use std::sync::Arc;

    use gatecrest_application::{
        ApiRepository, ApiService, ApiServiceConfig, AuditSink, EventStore, GroupUserDirectory,
        MembershipDirectory, NewApiInput, Notifier, PlanRegistry,
    };
    use gatecrest_core::EnvironmentId;
    use gatecrest_domain::{
        ApiPrimaryOwnerMode, DeploymentEventType, Endpoint, LifecycleState, LoggingPolicy,
        PrimaryOwner,
    };

    use super::{
        InMemoryApiRepository, InMemoryAuditSink, InMemoryEventStore, InMemoryGroupUserDirectory,
        InMemoryMembershipDirectory, InMemoryPlanRegistry, TracingNotifier,
    };

    fn service(directory: Arc<InMemoryGroupUserDirectory>) -> ApiService {
        ApiService::new(
            ApiServiceConfig {
                primary_owner_mode: ApiPrimaryOwnerMode::Hybrid,
                review_enabled: false,
            },
            Arc::new(InMemoryApiRepository::new()) as Arc<dyn ApiRepository>,
            Arc::new(InMemoryEventStore::new()) as Arc<dyn EventStore>,
            Arc::new(InMemoryMembershipDirectory::new()) as Arc<dyn MembershipDirectory>,
            directory as Arc<dyn GroupUserDirectory>,
            Arc::new(InMemoryPlanRegistry::new()) as Arc<dyn PlanRegistry>,
            Arc::new(InMemoryAuditSink::new()) as Arc<dyn AuditSink>,
            Arc::new(TracingNotifier::new()) as Arc<dyn Notifier>,
        )
    }

    fn input() -> NewApiInput {
        NewApiInput {
            name: "Orders".to_owned(),
            version: "1.0".to_owned(),
            description: None,
            cross_id: None,
            routing: Vec::new(),
            endpoints: vec![Endpoint {
                name: "primary".to_owned(),
                target: "https://orders.internal".to_owned(),
            }],
            tags: Vec::new(),
            logging: LoggingPolicy::default(),
            owner_hint: None,
        }
    }

    #[tokio::test]
    async fn full_lifecycle_over_in_memory_adapters() {
        let directory = Arc::new(InMemoryGroupUserDirectory::new());
        directory.grant_owner_group("u1", "g1").await;
        let service = service(directory);

        let mut input = input();
        input.owner_hint = Some(PrimaryOwner::Group { id: "g1".to_owned() });
        let created = service.create(EnvironmentId::new(), input, "u1").await;
        assert!(created.is_ok());
        let api = created.unwrap_or_else(|_| unreachable!());
        assert!(!service.is_synchronized(&api.id).await);

        let owner = service.primary_owner(&api.id).await;
        assert_eq!(owner.ok(), Some(PrimaryOwner::Group { id: "g1".to_owned() }));

        let deployed = service
            .deploy(&api.id, DeploymentEventType::PublishApi, "u1", Some("go-live"))
            .await;
        assert!(deployed.is_ok());
        assert!(service.is_synchronized(&api.id).await);

        let started = service.start(&api.id, "u1").await;
        assert_eq!(
            started.ok().map(|api| api.lifecycle_state),
            Some(LifecycleState::Started)
        );

        let stopped = service.stop(&api.id, "u1").await;
        assert!(stopped.is_ok());

        let history = service.deployment_history(&api.id).await;
        assert_eq!(history.map(|events| events.len()).ok(), Some(3));

        let stopped_again = service.stop(&api.id, "u1").await;
        assert!(stopped_again.is_ok());

        let deleted = service.delete(&api.id, "u1").await;
        assert!(deleted.is_ok());
        assert!(service.find_by_id(&api.id).await.is_err());
    }
}
