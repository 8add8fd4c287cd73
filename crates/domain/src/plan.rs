use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subscription plan status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// Draft plan, invisible to consumers.
    Staging,
    /// Open for subscriptions.
    Published,
    /// Closed to new subscriptions, existing ones keep running.
    Deprecated,
    /// Fully closed.
    Closed,
}

/// Subscription plan attached to an API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan identifier.
    pub id: String,
    /// Owning API identifier.
    pub api_id: String,
    /// Display name.
    pub name: String,
    /// Plan status.
    pub status: PlanStatus,
    /// Set when a plan edit requires a redeploy to reach the gateways.
    #[serde(default)]
    pub need_redeploy_at: Option<DateTime<Utc>>,
}

impl Plan {
    /// Returns whether a plan edit is still waiting for a deploy after `deployed_at`.
    #[must_use]
    pub fn needs_redeploy_since(&self, deployed_at: Option<DateTime<Utc>>) -> bool {
        if self.status == PlanStatus::Staging {
            return false;
        }

        match (self.need_redeploy_at, deployed_at) {
            (Some(need_redeploy_at), Some(deployed_at)) => need_redeploy_at > deployed_at,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::{Plan, PlanStatus};

    fn plan(status: PlanStatus) -> Plan {
        Plan {
            id: "p1".to_owned(),
            api_id: "a1".to_owned(),
            name: "Gold".to_owned(),
            status,
            need_redeploy_at: Some(Utc::now()),
        }
    }

    #[test]
    fn staging_plans_never_force_redeploy() {
        let plan = plan(PlanStatus::Staging);
        assert!(!plan.needs_redeploy_since(Some(Utc::now() - Duration::hours(1))));
    }

    #[test]
    fn edit_after_deploy_forces_redeploy() {
        let plan = plan(PlanStatus::Published);
        assert!(plan.needs_redeploy_since(Some(Utc::now() - Duration::hours(1))));
    }

    #[test]
    fn edit_before_deploy_does_not_force_redeploy() {
        let plan = plan(PlanStatus::Published);
        assert!(!plan.needs_redeploy_since(Some(Utc::now() + Duration::hours(1))));
    }

    #[test]
    fn untouched_plan_never_forces_redeploy() {
        let mut plan = plan(PlanStatus::Published);
        plan.need_redeploy_at = None;
        assert!(!plan.needs_redeploy_since(None));
    }
}
