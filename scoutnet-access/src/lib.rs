//! Access Policy Evaluator for Scoutnet
//!
//! Decides, for a viewer/target pair, whether contact data and videos may be
//! seen and whether a message may be sent:
//! - Own-profile and admin escalations
//! - Premium entitlement gating
//! - Player-to-player blindness
//!
//! Every predicate is total and denies by default. Contexts are built per
//! check from freshly fetched identity data and never cached.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod context;
pub mod evaluator;

pub use context::{AccessClaims, AccessContext};
pub use evaluator::{
    can_send_message, can_view_contact_data, can_view_videos, evaluate, message_decision,
    Capability, DenialReason, MessageDecision,
};
