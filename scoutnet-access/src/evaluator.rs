//! Capability predicates over an [`AccessContext`]

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use scoutnet_common::types::{ProfileRole, ViewerRole};

use crate::context::AccessContext;

/// Capabilities gated by the access policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ContactData,
    Videos,
    Message,
}

impl Capability {
    pub const ALL: [Capability; 3] = [Self::ContactData, Self::Videos, Self::Message];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContactData => "contact_data",
            Self::Videos => "videos",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-facing reason for a blocked message
///
/// This set is closed. Display strings are shown to end users.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    #[error("not premium")]
    NotPremium,

    #[error("self-message")]
    SelfMessage,

    #[error("player-to-player blocked")]
    PlayerToPlayerBlocked,
}

impl DenialReason {
    /// Stable code for logs and API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotPremium => "not_premium",
            Self::SelfMessage => "self_message",
            Self::PlayerToPlayerBlocked => "player_to_player_blocked",
        }
    }
}

/// Outcome of the messaging rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageDecision {
    Allowed,
    Denied(DenialReason),
}

impl MessageDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Convert into a `Result` for `?` at call sites
    ///
    /// # Errors
    /// Returns the denial reason when the decision is a denial.
    pub fn into_result(self) -> Result<(), DenialReason> {
        match self {
            Self::Allowed => Ok(()),
            Self::Denied(reason) => Err(reason),
        }
    }
}

/// Rules that apply once neither escalation holds.
///
/// Unknown roles are the least-privileged case and share the premium denial.
fn entitled_pairing(ctx: &AccessContext) -> Result<(), DenialReason> {
    if !ctx.viewer_is_premium {
        return Err(DenialReason::NotPremium);
    }

    match (ctx.viewer_role, ctx.target_role) {
        (Some(ViewerRole::Player), Some(ProfileRole::Player)) => {
            Err(DenialReason::PlayerToPlayerBlocked)
        }
        (Some(_), Some(_)) => Ok(()),
        _ => Err(DenialReason::NotPremium),
    }
}

/// Shared rule for contact data and videos.
fn can_view_protected(ctx: &AccessContext) -> bool {
    ctx.has_full_visibility() || entitled_pairing(ctx).is_ok()
}

/// Whether the viewer may see the target's contact data
pub fn can_view_contact_data(ctx: &AccessContext) -> bool {
    can_view_protected(ctx)
}

/// Whether the viewer may watch the target's videos
pub fn can_view_videos(ctx: &AccessContext) -> bool {
    can_view_protected(ctx)
}

/// Evaluate the messaging rule with its denial reason.
///
/// A viewer can never message themselves, admin or not.
pub fn message_decision(ctx: &AccessContext) -> MessageDecision {
    if ctx.is_own_profile {
        return MessageDecision::Denied(DenialReason::SelfMessage);
    }
    if ctx.viewer_is_admin {
        return MessageDecision::Allowed;
    }

    match entitled_pairing(ctx) {
        Ok(()) => MessageDecision::Allowed,
        Err(reason) => MessageDecision::Denied(reason),
    }
}

/// Whether the viewer may send a message to the target
pub fn can_send_message(ctx: &AccessContext) -> bool {
    message_decision(ctx).is_allowed()
}

/// Evaluate a single capability
pub fn evaluate(ctx: &AccessContext, capability: Capability) -> bool {
    match capability {
        Capability::ContactData => can_view_contact_data(ctx),
        Capability::Videos => can_view_videos(ctx),
        Capability::Message => can_send_message(ctx),
    }
}
