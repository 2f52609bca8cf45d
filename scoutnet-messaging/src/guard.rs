//! Messaging eligibility guard
//!
//! Every outgoing message passes through [`MessagingGuard::guarded_send`].
//! The identity is fetched at the moment of send, so a premium entitlement
//! that lapsed after the compose screen rendered is still enforced.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use scoutnet_access::{message_decision, AccessContext, DenialReason, MessageDecision};
use scoutnet_common::types::ProfileRef;

use crate::identity::IdentitySource;
use crate::message::{Message, MessageAccepted, ThreadKey};
use crate::store::ThreadStore;
use crate::view::ThreadView;

/// Why counterpart content was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InboundRejected {
    #[error("recipient has not messaged this sender")]
    NoOpenConversation,
}

/// Authorizes and appends messages to threads
pub struct MessagingGuard<S: ThreadStore> {
    store: Arc<S>,
}

impl<S: ThreadStore> MessagingGuard<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Authorize a composed message and append it to the thread.
    ///
    /// # Errors
    /// Returns the user-facing [`DenialReason`] when the viewer may not
    /// message `recipient`. Nothing is appended in that case.
    pub fn guarded_send(
        &self,
        identity: &dyn IdentitySource,
        recipient: &ProfileRef,
        content: &str,
    ) -> Result<MessageAccepted, DenialReason> {
        let viewer = identity.current_viewer();
        let context = AccessContext::for_target(&viewer, recipient);

        if let MessageDecision::Denied(reason) = message_decision(&context) {
            info!(
                viewer = %viewer.user_id,
                recipient = %recipient.profile_id,
                reason = reason.code(),
                "Message denied"
            );
            return Err(reason);
        }

        let message = Message::new(viewer.as_profile(), recipient.profile_id, content);
        let accepted = MessageAccepted::from(&message);
        self.store.append(message);

        debug!(
            message_id = %accepted.message_id,
            viewer = %viewer.user_id,
            recipient = %recipient.profile_id,
            "Message accepted"
        );
        Ok(accepted)
    }

    /// Append content written by the counterpart of a thread.
    ///
    /// Only replies are accepted: the thread must still hold a message that
    /// `recipient_id` sent to `sender` through [`Self::guarded_send`].
    /// Inbound content is stored raw and only ever leaves the store through
    /// [`ThreadView`], which redacts it per observer.
    ///
    /// # Errors
    /// Returns [`InboundRejected::NoOpenConversation`] when no such message
    /// exists. Nothing is appended in that case.
    pub fn record_inbound(
        &self,
        sender: &ProfileRef,
        recipient_id: Uuid,
        content: &str,
    ) -> Result<MessageAccepted, InboundRejected> {
        let thread = ThreadKey::between(sender.profile_id, recipient_id);
        let opened = self
            .store
            .messages(&thread)
            .iter()
            .any(|m| {
                !m.inbound
                    && m.sender.profile_id == recipient_id
                    && m.recipient_id == sender.profile_id
            });

        if !opened {
            info!(
                sender = %sender.profile_id,
                recipient = %recipient_id,
                "Inbound message rejected"
            );
            return Err(InboundRejected::NoOpenConversation);
        }

        let message = Message::inbound(*sender, recipient_id, content);
        let accepted = MessageAccepted::from(&message);
        self.store.append(message);

        debug!(
            message_id = %accepted.message_id,
            sender = %sender.profile_id,
            "Inbound message recorded"
        );
        Ok(accepted)
    }

    /// Redacting read access to the threads this guard writes to
    pub fn view(&self) -> ThreadView<S> {
        ThreadView::new(Arc::clone(&self.store))
    }

    /// Thread between the current viewer and `counterpart`
    pub fn thread_with(&self, identity: &dyn IdentitySource, counterpart: Uuid) -> ThreadKey {
        ThreadKey::between(identity.current_viewer().user_id, counterpart)
    }
}
