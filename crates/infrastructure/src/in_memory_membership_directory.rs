use std::collections::HashMap;

use async_trait::async_trait;
use gatecrest_application::MembershipDirectory;
use gatecrest_core::AppResult;
use gatecrest_domain::PrimaryOwner;
use tokio::sync::RwLock;

/// In-memory membership index holding primary-owner records.
#[derive(Debug, Default)]
pub struct InMemoryMembershipDirectory {
    owners: RwLock<HashMap<String, PrimaryOwner>>,
}

impl InMemoryMembershipDirectory {
    /// Creates an empty in-memory membership index.
    #[must_use]
    pub fn new() -> Self {
        Self {
            owners: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl MembershipDirectory for InMemoryMembershipDirectory {
    async fn primary_owner(&self, api_id: &str) -> AppResult<Option<PrimaryOwner>> {
        Ok(self.owners.read().await.get(api_id).cloned())
    }

    async fn set_primary_owner(&self, api_id: &str, owner: PrimaryOwner) -> AppResult<()> {
        self.owners.write().await.insert(api_id.to_owned(), owner);
        Ok(())
    }

    async fn delete_reference(&self, api_id: &str) -> AppResult<()> {
        self.owners.write().await.remove(api_id);
        Ok(())
    }
}
