use serde::{Deserialize, Serialize};

/// Environment-wide policy for resolving the primary owner of a new API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiPrimaryOwnerMode {
    /// Primary owners are always users.
    User,
    /// Primary owners are always groups.
    Group,
    /// Either a user or a group may own an API.
    Hybrid,
}

/// The single accountable identity for an API.
///
/// Stored as a membership record keyed by the API id, never as a field on the
/// definition itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimaryOwner {
    /// An individual user owns the API.
    User {
        /// User identifier.
        id: String,
    },
    /// A group owns the API.
    Group {
        /// Group identifier.
        id: String,
    },
}

impl PrimaryOwner {
    /// Returns the owner identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::User { id } | Self::Group { id } => id.as_str(),
        }
    }

    /// Returns a stable discriminator value.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::User { .. } => "user",
            Self::Group { .. } => "group",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PrimaryOwner;

    #[test]
    fn owner_exposes_id_and_kind() {
        let owner = PrimaryOwner::Group {
            id: "g1".to_owned(),
        };
        assert_eq!(owner.id(), "g1");
        assert_eq!(owner.kind(), "group");
    }

    #[test]
    fn owner_serializes_with_type_tag() {
        let owner = PrimaryOwner::User {
            id: "u1".to_owned(),
        };
        let encoded = serde_json::to_string(&owner);
        assert!(encoded.is_ok());
        assert!(encoded.unwrap_or_default().contains("\"type\":\"user\""));
    }
}
