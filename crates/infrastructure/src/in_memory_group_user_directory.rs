use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use gatecrest_application::GroupUserDirectory;
use gatecrest_core::AppResult;
use tokio::sync::RwLock;

/// In-memory group and user directory implementation.
///
/// Owner-group grants keep insertion order, which makes the first grant the
/// fallback group during ownership resolution.
#[derive(Debug, Default)]
pub struct InMemoryGroupUserDirectory {
    users: RwLock<HashSet<String>>,
    groups: RwLock<HashSet<String>>,
    owner_groups: RwLock<HashMap<String, Vec<String>>>,
}

impl InMemoryGroupUserDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashSet::new()),
            groups: RwLock::new(HashSet::new()),
            owner_groups: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a user.
    pub async fn add_user(&self, user_id: &str) {
        self.users.write().await.insert(user_id.to_owned());
    }

    /// Registers a group.
    pub async fn add_group(&self, group_id: &str) {
        self.groups.write().await.insert(group_id.to_owned());
    }

    /// Grants the API primary-owner group role to a user on a group.
    pub async fn grant_owner_group(&self, user_id: &str, group_id: &str) {
        self.add_user(user_id).await;
        self.add_group(group_id).await;

        let mut owner_groups = self.owner_groups.write().await;
        let groups = owner_groups.entry(user_id.to_owned()).or_default();
        if !groups.iter().any(|granted| granted == group_id) {
            groups.push(group_id.to_owned());
        }
    }
}

#[async_trait]
impl GroupUserDirectory for InMemoryGroupUserDirectory {
    async fn user_exists(&self, user_id: &str) -> AppResult<bool> {
        Ok(self.users.read().await.contains(user_id))
    }

    async fn group_exists(&self, group_id: &str) -> AppResult<bool> {
        Ok(self.groups.read().await.contains(group_id))
    }

    async fn primary_owner_groups(&self, user_id: &str) -> AppResult<Vec<String>> {
        Ok(self
            .owner_groups
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use gatecrest_application::GroupUserDirectory;

    use super::InMemoryGroupUserDirectory;

    #[tokio::test]
    async fn owner_group_grants_keep_insertion_order() {
        let directory = InMemoryGroupUserDirectory::new();
        directory.grant_owner_group("u1", "g2").await;
        directory.grant_owner_group("u1", "g1").await;
        directory.grant_owner_group("u1", "g2").await;

        let groups = directory.primary_owner_groups("u1").await;
        assert_eq!(groups.ok(), Some(vec!["g2".to_owned(), "g1".to_owned()]));
    }

    #[tokio::test]
    async fn granting_registers_user_and_group() {
        let directory = InMemoryGroupUserDirectory::new();
        directory.grant_owner_group("u1", "g1").await;

        assert_eq!(directory.user_exists("u1").await.ok(), Some(true));
        assert_eq!(directory.group_exists("g1").await.ok(), Some(true));
        assert_eq!(directory.user_exists("u2").await.ok(), Some(false));
    }
}
