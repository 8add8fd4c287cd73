use gatecrest_core::{AppError, AppResult};

use crate::{ApiLifecycleState, WorkflowState};

/// Validates a governance state transition request.
///
/// Rules are evaluated in order: deprecated APIs reject every edit, self
/// transitions are accepted as no-ops, archival is terminal, an unpublished
/// API can never return to created, and a created API pending review is
/// frozen.
pub fn check_lifecycle_transition(
    current: ApiLifecycleState,
    requested: ApiLifecycleState,
    workflow_state: Option<WorkflowState>,
) -> AppResult<()> {
    if current == ApiLifecycleState::Deprecated {
        return Err(rejection(requested));
    }

    if current == requested {
        return Ok(());
    }

    match current {
        ApiLifecycleState::Archived => Err(rejection(requested)),
        ApiLifecycleState::Unpublished if requested == ApiLifecycleState::Created => {
            Err(rejection(requested))
        }
        ApiLifecycleState::Created if workflow_state == Some(WorkflowState::InReview) => {
            Err(rejection(requested))
        }
        _ => Ok(()),
    }
}

fn rejection(requested: ApiLifecycleState) -> AppError {
    AppError::LifecycleStateChangeNotAllowed {
        requested: requested.as_str().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use gatecrest_core::AppError;
    use proptest::prelude::*;

    use super::check_lifecycle_transition;
    use crate::{ApiLifecycleState, WorkflowState};

    const ALL_STATES: [ApiLifecycleState; 5] = [
        ApiLifecycleState::Created,
        ApiLifecycleState::Published,
        ApiLifecycleState::Unpublished,
        ApiLifecycleState::Deprecated,
        ApiLifecycleState::Archived,
    ];

    fn any_state() -> impl Strategy<Value = ApiLifecycleState> {
        prop::sample::select(ALL_STATES.as_slice())
    }

    #[test]
    fn self_transition_is_accepted() {
        for state in ALL_STATES {
            if state == ApiLifecycleState::Deprecated {
                continue;
            }
            assert!(check_lifecycle_transition(state, state, None).is_ok());
        }
    }

    #[test]
    fn deprecated_rejects_even_self_transition() {
        let result = check_lifecycle_transition(
            ApiLifecycleState::Deprecated,
            ApiLifecycleState::Deprecated,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unpublished_cannot_return_to_created() {
        let result = check_lifecycle_transition(
            ApiLifecycleState::Unpublished,
            ApiLifecycleState::Created,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unpublished_can_republish() {
        let result = check_lifecycle_transition(
            ApiLifecycleState::Unpublished,
            ApiLifecycleState::Published,
            None,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn created_in_review_is_frozen() {
        let result = check_lifecycle_transition(
            ApiLifecycleState::Created,
            ApiLifecycleState::Published,
            Some(WorkflowState::InReview),
        );
        assert!(result.is_err());
    }

    #[test]
    fn created_draft_can_publish() {
        let result = check_lifecycle_transition(
            ApiLifecycleState::Created,
            ApiLifecycleState::Published,
            Some(WorkflowState::Draft),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn rejection_carries_requested_state() {
        let result = check_lifecycle_transition(
            ApiLifecycleState::Archived,
            ApiLifecycleState::Published,
            None,
        );
        match result {
            Err(AppError::LifecycleStateChangeNotAllowed { requested }) => {
                assert_eq!(requested, "published");
            }
            _ => panic!("expected lifecycle rejection"),
        }
    }

    proptest! {
        #[test]
        fn deprecated_rejects_every_request(requested in any_state()) {
            prop_assert!(
                check_lifecycle_transition(ApiLifecycleState::Deprecated, requested, None).is_err()
            );
        }

        #[test]
        fn archived_accepts_only_archived(requested in any_state()) {
            let result =
                check_lifecycle_transition(ApiLifecycleState::Archived, requested, None);
            prop_assert_eq!(result.is_ok(), requested == ApiLifecycleState::Archived);
        }

        #[test]
        fn in_review_created_rejects_every_change(requested in any_state()) {
            let result = check_lifecycle_transition(
                ApiLifecycleState::Created,
                requested,
                Some(WorkflowState::InReview),
            );
            prop_assert_eq!(result.is_ok(), requested == ApiLifecycleState::Created);
        }
    }
}
