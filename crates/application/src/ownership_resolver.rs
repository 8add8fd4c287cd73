use std::sync::Arc;

use gatecrest_core::{AppError, AppResult};
use gatecrest_domain::{ApiPrimaryOwnerMode, PrimaryOwner};

use crate::GroupUserDirectory;

/// Resolves the authoritative primary owner of a new or restored API.
///
/// Resolution is a pure policy over the directory port: identical inputs
/// always produce the identical owner, and the only failure is the GROUP-mode
/// dead end where no fallback group exists.
#[derive(Clone)]
pub struct OwnershipResolver {
    directory: Arc<dyn GroupUserDirectory>,
}

impl OwnershipResolver {
    /// Creates a resolver over a directory implementation.
    #[must_use]
    pub fn new(directory: Arc<dyn GroupUserDirectory>) -> Self {
        Self { directory }
    }

    /// Computes the primary owner for the configured mode, an optional
    /// ownership hint from an imported definition, and the requesting user.
    pub async fn resolve(
        &self,
        mode: ApiPrimaryOwnerMode,
        hint: Option<&PrimaryOwner>,
        requesting_user_id: &str,
    ) -> AppResult<PrimaryOwner> {
        match mode {
            ApiPrimaryOwnerMode::User => self.resolve_user_mode(hint, requesting_user_id).await,
            ApiPrimaryOwnerMode::Group => self.resolve_group_mode(hint, requesting_user_id).await,
            ApiPrimaryOwnerMode::Hybrid => self.resolve_hybrid_mode(hint, requesting_user_id).await,
        }
    }

    async fn resolve_user_mode(
        &self,
        hint: Option<&PrimaryOwner>,
        requesting_user_id: &str,
    ) -> AppResult<PrimaryOwner> {
        if let Some(PrimaryOwner::User { id }) = hint
            && self.directory.user_exists(id).await?
        {
            return Ok(PrimaryOwner::User { id: id.clone() });
        }

        // Group hints, dangling user hints and missing hints all fall back
        // to the requesting user.
        Ok(PrimaryOwner::User {
            id: requesting_user_id.to_owned(),
        })
    }

    async fn resolve_group_mode(
        &self,
        hint: Option<&PrimaryOwner>,
        requesting_user_id: &str,
    ) -> AppResult<PrimaryOwner> {
        match hint {
            Some(PrimaryOwner::Group { id }) => {
                if self.directory.group_exists(id).await? {
                    return Ok(PrimaryOwner::Group { id: id.clone() });
                }

                self.first_owner_group(requesting_user_id).await
            }
            Some(PrimaryOwner::User { id }) => {
                if let Some(group_id) = self.directory.primary_owner_groups(id).await?.into_iter().next() {
                    return Ok(PrimaryOwner::Group { id: group_id });
                }

                self.first_owner_group(requesting_user_id).await
            }
            None => self.first_owner_group(requesting_user_id).await,
        }
    }

    async fn resolve_hybrid_mode(
        &self,
        hint: Option<&PrimaryOwner>,
        requesting_user_id: &str,
    ) -> AppResult<PrimaryOwner> {
        match hint {
            Some(PrimaryOwner::Group { id }) => {
                if self.directory.group_exists(id).await? {
                    return Ok(PrimaryOwner::Group { id: id.clone() });
                }

                match self.first_owner_group(requesting_user_id).await {
                    Ok(owner) => Ok(owner),
                    Err(AppError::NoPrimaryOwnerGroupForUser { .. }) => Ok(PrimaryOwner::User {
                        id: requesting_user_id.to_owned(),
                    }),
                    Err(error) => Err(error),
                }
            }
            Some(PrimaryOwner::User { .. }) => self.resolve_user_mode(hint, requesting_user_id).await,
            None => Ok(PrimaryOwner::User {
                id: requesting_user_id.to_owned(),
            }),
        }
    }

    async fn first_owner_group(&self, user_id: &str) -> AppResult<PrimaryOwner> {
        self.directory
            .primary_owner_groups(user_id)
            .await?
            .into_iter()
            .next()
            .map(|id| PrimaryOwner::Group { id })
            .ok_or_else(|| AppError::NoPrimaryOwnerGroupForUser {
                user_id: user_id.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use gatecrest_core::{AppError, AppResult};
    use gatecrest_domain::{ApiPrimaryOwnerMode, PrimaryOwner};

    use super::OwnershipResolver;
    use crate::GroupUserDirectory;

    #[derive(Default)]
    struct FakeDirectory {
        users: Vec<String>,
        groups: Vec<String>,
        owner_groups: HashMap<String, Vec<String>>,
    }

    #[async_trait]
    impl GroupUserDirectory for FakeDirectory {
        async fn user_exists(&self, user_id: &str) -> AppResult<bool> {
            Ok(self.users.iter().any(|id| id == user_id))
        }

        async fn group_exists(&self, group_id: &str) -> AppResult<bool> {
            Ok(self.groups.iter().any(|id| id == group_id))
        }

        async fn primary_owner_groups(&self, user_id: &str) -> AppResult<Vec<String>> {
            Ok(self.owner_groups.get(user_id).cloned().unwrap_or_default())
        }
    }

    fn resolver(directory: FakeDirectory) -> OwnershipResolver {
        OwnershipResolver::new(Arc::new(directory))
    }

    fn user_hint(id: &str) -> PrimaryOwner {
        PrimaryOwner::User { id: id.to_owned() }
    }

    fn group_hint(id: &str) -> PrimaryOwner {
        PrimaryOwner::Group { id: id.to_owned() }
    }

    #[tokio::test]
    async fn user_mode_without_hint_uses_requesting_user() {
        let resolved = resolver(FakeDirectory::default())
            .resolve(ApiPrimaryOwnerMode::User, None, "u1")
            .await;
        assert_eq!(resolved.ok(), Some(user_hint("u1")));
    }

    #[tokio::test]
    async fn user_mode_with_group_hint_uses_requesting_user() {
        let directory = FakeDirectory {
            groups: vec!["g1".to_owned()],
            ..FakeDirectory::default()
        };
        let resolved = resolver(directory)
            .resolve(ApiPrimaryOwnerMode::User, Some(&group_hint("g1")), "u1")
            .await;
        assert_eq!(resolved.ok(), Some(user_hint("u1")));
    }

    #[tokio::test]
    async fn user_mode_with_dangling_user_hint_falls_back_without_error() {
        let resolved = resolver(FakeDirectory::default())
            .resolve(ApiPrimaryOwnerMode::User, Some(&user_hint("ghost")), "u1")
            .await;
        assert_eq!(resolved.ok(), Some(user_hint("u1")));
    }

    #[tokio::test]
    async fn user_mode_with_known_user_hint_uses_hinted_user() {
        let directory = FakeDirectory {
            users: vec!["u2".to_owned()],
            ..FakeDirectory::default()
        };
        let resolved = resolver(directory)
            .resolve(ApiPrimaryOwnerMode::User, Some(&user_hint("u2")), "u1")
            .await;
        assert_eq!(resolved.ok(), Some(user_hint("u2")));
    }

    #[tokio::test]
    async fn group_mode_without_hint_uses_first_owner_group() {
        let directory = FakeDirectory {
            owner_groups: HashMap::from([(
                "u1".to_owned(),
                vec!["g1".to_owned(), "g2".to_owned()],
            )]),
            ..FakeDirectory::default()
        };
        let resolved = resolver(directory)
            .resolve(ApiPrimaryOwnerMode::Group, None, "u1")
            .await;
        assert_eq!(resolved.ok(), Some(group_hint("g1")));
    }

    #[tokio::test]
    async fn group_mode_without_eligible_group_raises() {
        let resolved = resolver(FakeDirectory::default())
            .resolve(ApiPrimaryOwnerMode::Group, None, "u1")
            .await;
        match resolved {
            Err(AppError::NoPrimaryOwnerGroupForUser { user_id }) => assert_eq!(user_id, "u1"),
            _ => panic!("expected NoPrimaryOwnerGroupForUser"),
        }
    }

    #[tokio::test]
    async fn group_mode_with_dangling_group_hint_falls_back_to_first_group() {
        let directory = FakeDirectory {
            owner_groups: HashMap::from([("u1".to_owned(), vec!["g1".to_owned()])]),
            ..FakeDirectory::default()
        };
        let resolved = resolver(directory)
            .resolve(ApiPrimaryOwnerMode::Group, Some(&group_hint("ghost")), "u1")
            .await;
        assert_eq!(resolved.ok(), Some(group_hint("g1")));
    }

    #[tokio::test]
    async fn group_mode_with_user_hint_uses_hinted_users_group() {
        let directory = FakeDirectory {
            owner_groups: HashMap::from([
                ("u2".to_owned(), vec!["g2".to_owned()]),
                ("u1".to_owned(), vec!["g1".to_owned()]),
            ]),
            ..FakeDirectory::default()
        };
        let resolved = resolver(directory)
            .resolve(ApiPrimaryOwnerMode::Group, Some(&user_hint("u2")), "u1")
            .await;
        assert_eq!(resolved.ok(), Some(group_hint("g2")));
    }

    #[tokio::test]
    async fn group_mode_with_groupless_user_hint_falls_back_to_requesting_user_group() {
        let directory = FakeDirectory {
            owner_groups: HashMap::from([("u1".to_owned(), vec!["g1".to_owned()])]),
            ..FakeDirectory::default()
        };
        let resolved = resolver(directory)
            .resolve(ApiPrimaryOwnerMode::Group, Some(&user_hint("u2")), "u1")
            .await;
        assert_eq!(resolved.ok(), Some(group_hint("g1")));
    }

    #[tokio::test]
    async fn hybrid_mode_without_hint_uses_requesting_user() {
        let resolved = resolver(FakeDirectory::default())
            .resolve(ApiPrimaryOwnerMode::Hybrid, None, "u1")
            .await;
        assert_eq!(resolved.ok(), Some(user_hint("u1")));
    }

    #[tokio::test]
    async fn hybrid_mode_with_known_group_hint_uses_group() {
        let directory = FakeDirectory {
            groups: vec!["g1".to_owned()],
            ..FakeDirectory::default()
        };
        let resolved = resolver(directory)
            .resolve(ApiPrimaryOwnerMode::Hybrid, Some(&group_hint("g1")), "u1")
            .await;
        assert_eq!(resolved.ok(), Some(group_hint("g1")));
    }

    #[tokio::test]
    async fn hybrid_mode_exhausted_group_fallback_uses_requesting_user() {
        let resolved = resolver(FakeDirectory::default())
            .resolve(ApiPrimaryOwnerMode::Hybrid, Some(&group_hint("ghost")), "u1")
            .await;
        assert_eq!(resolved.ok(), Some(user_hint("u1")));
    }
}
