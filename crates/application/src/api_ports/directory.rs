use async_trait::async_trait;
use gatecrest_core::AppResult;

/// Port for the external group and user directory.
#[async_trait]
pub trait GroupUserDirectory: Send + Sync {
    /// Returns whether a user exists.
    async fn user_exists(&self, user_id: &str) -> AppResult<bool>;

    /// Returns whether a group exists.
    async fn group_exists(&self, group_id: &str) -> AppResult<bool>;

    /// Lists groups where the user holds the API primary-owner group role,
    /// in stable order.
    async fn primary_owner_groups(&self, user_id: &str) -> AppResult<Vec<String>>;
}
