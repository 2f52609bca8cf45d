//! Access context for request-scoped authorization checks

use serde::{Deserialize, Serialize};

use scoutnet_common::error::Result;
use scoutnet_common::types::{ProfileRef, ProfileRole, ViewerIdentity, ViewerRole};

/// Viewer/target facts for a single authorization check
///
/// A role of `None` means the value was missing or unrecognized; the
/// evaluator denies on it. `Default` is the fully unprivileged context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessContext {
    /// Role of the viewer
    pub viewer_role: Option<ViewerRole>,
    /// Whether a paid entitlement is active right now
    pub viewer_is_premium: bool,
    /// Platform operator override
    pub viewer_is_admin: bool,
    /// Target identity equals viewer identity
    pub is_own_profile: bool,
    /// Declared role of the target profile
    pub target_role: Option<ProfileRole>,
}

impl AccessContext {
    /// Create a non-premium, non-admin context for two other users
    pub fn new(viewer_role: ViewerRole, target_role: ProfileRole) -> Self {
        Self {
            viewer_role: Some(viewer_role),
            target_role: Some(target_role),
            ..Default::default()
        }
    }

    /// Build the context for `viewer` looking at `target`
    pub fn for_target(viewer: &ViewerIdentity, target: &ProfileRef) -> Self {
        Self {
            viewer_role: viewer.role,
            viewer_is_premium: viewer.is_premium,
            viewer_is_admin: viewer.is_admin,
            is_own_profile: viewer.user_id == target.profile_id,
            target_role: target.role,
        }
    }

    /// Build a context from raw claims
    ///
    /// Missing flags are `false`; missing or unrecognized roles are unknown.
    pub fn from_claims(claims: &AccessClaims) -> Self {
        Self {
            viewer_role: claims.viewer_role.as_deref().and_then(ViewerRole::parse),
            viewer_is_premium: claims.viewer_is_premium.unwrap_or(false),
            viewer_is_admin: claims.viewer_is_admin.unwrap_or(false),
            is_own_profile: claims.is_own_profile.unwrap_or(false),
            target_role: claims.target_role.as_deref().and_then(ProfileRole::parse),
        }
    }

    #[must_use]
    pub fn premium(mut self) -> Self {
        self.viewer_is_premium = true;
        self
    }

    #[must_use]
    pub fn admin(mut self) -> Self {
        self.viewer_is_admin = true;
        self
    }

    #[must_use]
    pub fn own_profile(mut self) -> Self {
        self.is_own_profile = true;
        self
    }

    /// Either escalation that grants full visibility
    pub fn has_full_visibility(&self) -> bool {
        self.is_own_profile || self.viewer_is_admin
    }
}

/// Untyped claims as they arrive from a session payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessClaims {
    pub viewer_role: Option<String>,
    pub viewer_is_premium: Option<bool>,
    pub viewer_is_admin: Option<bool>,
    pub is_own_profile: Option<bool>,
    pub target_role: Option<String>,
}

impl AccessClaims {
    /// Parse claims from a JSON object
    ///
    /// # Errors
    /// Returns `Error::JsonError` if `payload` is not a JSON object of claims.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}
