use async_trait::async_trait;
use gatecrest_core::AppResult;
use gatecrest_domain::PrimaryOwner;

/// Port for the membership index holding primary-owner records.
#[async_trait]
pub trait MembershipDirectory: Send + Sync {
    /// Returns the primary owner recorded for an API.
    async fn primary_owner(&self, api_id: &str) -> AppResult<Option<PrimaryOwner>>;

    /// Records the primary owner of an API, replacing any previous record.
    async fn set_primary_owner(&self, api_id: &str, owner: PrimaryOwner) -> AppResult<()>;

    /// Removes every membership record for an API.
    async fn delete_reference(&self, api_id: &str) -> AppResult<()>;
}
