//! Scoutnet access control and content redaction
//!
//! Scoutnet connects athletes, clubs, coaches and agents. This crate bundles
//! the policy that decides who may see what and who may contact whom.
//!
//! # Features
//!
//! - **Access Policy Evaluator** - contact data, video and messaging rules
//! - **Content Redaction Engine** - masks emails, phones, handles and links
//! - **Messaging Eligibility Guard** - authorizes and appends messages

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub use scoutnet_access as access;
pub use scoutnet_common as common;
pub use scoutnet_messaging as messaging;
pub use scoutnet_redact as redaction;

pub use scoutnet_access::{evaluate, AccessContext, Capability, DenialReason};
pub use scoutnet_redact::redact;

use std::sync::Arc;
use tracing::info;

use scoutnet_common::config::ScoutnetConfig;
use scoutnet_messaging::{InMemoryThreadStore, MessagingGuard, ThreadView};

/// Policy services wired to an in-memory thread store
pub struct Scoutnet {
    config: ScoutnetConfig,
    guard: MessagingGuard<InMemoryThreadStore>,
}

impl Scoutnet {
    /// Create the services with the given configuration
    #[must_use]
    pub fn new(config: ScoutnetConfig) -> Self {
        info!(
            message_buffer_size = config.messaging.message_buffer_size,
            "Initializing Scoutnet policy services"
        );

        let store = Arc::new(InMemoryThreadStore::new(&config.messaging));
        let guard = MessagingGuard::new(store);

        Self { config, guard }
    }

    /// The enforcement point for outgoing messages
    #[must_use]
    pub fn guard(&self) -> &MessagingGuard<InMemoryThreadStore> {
        &self.guard
    }

    /// Redacting read access to threads
    #[must_use]
    pub fn threads(&self) -> ThreadView<InMemoryThreadStore> {
        self.guard.view()
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &ScoutnetConfig {
        &self.config
    }
}

impl Default for Scoutnet {
    fn default() -> Self {
        Self::new(ScoutnetConfig::default())
    }
}
