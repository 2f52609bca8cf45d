//! Common types for the Scoutnet policy crates

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Role Types
// ============================================================================

/// Role declared on a profile record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileRole {
    Player,
    Club,
    Agent,
    Coach,
}

impl ProfileRole {
    pub const ALL: [ProfileRole; 4] = [Self::Player, Self::Club, Self::Agent, Self::Coach];

    /// Parse a role string from the profile store.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Unrecognized values yield `None` so callers can deny instead of erroring.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "player" => Some(Self::Player),
            "club" => Some(Self::Club),
            "agent" => Some(Self::Agent),
            "coach" => Some(Self::Coach),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Club => "club",
            Self::Agent => "agent",
            Self::Coach => "coach",
        }
    }
}

impl fmt::Display for ProfileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of the viewer performing an action
///
/// `None` is a signed-in viewer that has not created a profile yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    Player,
    Club,
    Agent,
    Coach,
    None,
}

impl ViewerRole {
    pub const ALL: [ViewerRole; 5] = [
        Self::Player,
        Self::Club,
        Self::Agent,
        Self::Coach,
        Self::None,
    ];

    /// Parse a role claim from the session layer.
    ///
    /// `"none"` is a viewer without a profile. Anything else unrecognized,
    /// including the empty string, yields `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim().to_ascii_lowercase();
        match value.as_str() {
            "none" => Some(Self::None),
            other => ProfileRole::parse(other).map(Self::from),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Club => "club",
            Self::Agent => "agent",
            Self::Coach => "coach",
            Self::None => "none",
        }
    }

    /// The profile role this viewer would appear as when targeted
    #[must_use]
    pub fn as_profile_role(&self) -> Option<ProfileRole> {
        match self {
            Self::Player => Some(ProfileRole::Player),
            Self::Club => Some(ProfileRole::Club),
            Self::Agent => Some(ProfileRole::Agent),
            Self::Coach => Some(ProfileRole::Coach),
            Self::None => None,
        }
    }
}

impl From<ProfileRole> for ViewerRole {
    fn from(role: ProfileRole) -> Self {
        match role {
            ProfileRole::Player => Self::Player,
            ProfileRole::Club => Self::Club,
            ProfileRole::Agent => Self::Agent,
            ProfileRole::Coach => Self::Coach,
        }
    }
}

impl fmt::Display for ViewerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Identity Types
// ============================================================================

/// Verified viewer identity supplied by the session layer
///
/// `role` is `None` when the session carried a role claim that could not be
/// recognized. `is_premium` reflects the entitlement at the time the record
/// was fetched and must not be reused across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerIdentity {
    pub user_id: Uuid,
    pub role: Option<ViewerRole>,
    pub is_premium: bool,
    pub is_admin: bool,
}

impl ViewerIdentity {
    #[must_use]
    pub fn new(user_id: Uuid, role: ViewerRole) -> Self {
        Self {
            user_id,
            role: Some(role),
            is_premium: false,
            is_admin: false,
        }
    }

    #[must_use]
    pub fn premium(mut self) -> Self {
        self.is_premium = true;
        self
    }

    #[must_use]
    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }

    /// This viewer seen as the target of someone else's action
    #[must_use]
    pub fn as_profile(&self) -> ProfileRef {
        ProfileRef {
            profile_id: self.user_id,
            role: self.role.and_then(|r| r.as_profile_role()),
        }
    }
}

/// A target profile's identity and declared role
///
/// `role` is `None` when the stored role is missing or unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileRef {
    pub profile_id: Uuid,
    pub role: Option<ProfileRole>,
}

impl ProfileRef {
    #[must_use]
    pub fn new(profile_id: Uuid, role: ProfileRole) -> Self {
        Self {
            profile_id,
            role: Some(role),
        }
    }

    /// Build from a raw role column value
    #[must_use]
    pub fn from_raw(profile_id: Uuid, role: &str) -> Self {
        Self {
            profile_id,
            role: ProfileRole::parse(role),
        }
    }
}
