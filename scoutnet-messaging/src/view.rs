//! Observer-facing reads of a thread

use std::borrow::Cow;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use scoutnet_access::{can_view_contact_data, AccessContext};
use scoutnet_redact::redact;

use crate::identity::IdentitySource;
use crate::message::{Message, ThreadKey};
use crate::store::ThreadStore;

/// A message as one observer is allowed to see it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleMessage {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub sent_at: DateTime<Utc>,
    pub content: String,
    /// Whether `content` differs from what the sender wrote
    pub redacted: bool,
}

/// Read access to threads, redacted per observer
///
/// Content is shown raw only when the observer may view the sender's
/// contact data.
pub struct ThreadView<S: ThreadStore> {
    store: Arc<S>,
}

impl<S: ThreadStore> ThreadView<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Messages of `thread` as the current observer may see them
    ///
    /// The observer is fetched fresh; the sender side of each decision uses
    /// the role recorded on the stored message.
    pub fn messages_for(
        &self,
        observer: &dyn IdentitySource,
        thread: &ThreadKey,
    ) -> Vec<VisibleMessage> {
        let observer = observer.current_viewer();
        let messages = self.store.messages(thread);

        let visible: Vec<VisibleMessage> = messages
            .iter()
            .map(|message| {
                let context = AccessContext::for_target(&observer, &message.sender);
                present(message, can_view_contact_data(&context))
            })
            .collect();

        debug!(
            observer = %observer.user_id,
            total = visible.len(),
            redacted = visible.iter().filter(|m| m.redacted).count(),
            "Thread read"
        );
        visible
    }
}

fn present(message: &Message, bypass: bool) -> VisibleMessage {
    let (content, redacted) = match redact(&message.content, bypass) {
        Cow::Borrowed(raw) => (raw.to_string(), false),
        Cow::Owned(masked) => (masked, true),
    };

    VisibleMessage {
        id: message.id,
        sender_id: message.sender.profile_id,
        sent_at: message.sent_at,
        content,
        redacted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryThreadStore;
    use scoutnet_common::types::{ProfileRef, ProfileRole, ViewerIdentity, ViewerRole};

    const CONTENT: &str = "me chama no (11) 91234-5678 ou @clube_fc";

    fn seeded() -> (ThreadView<InMemoryThreadStore>, ProfileRef, ProfileRef, ThreadKey) {
        let store = Arc::new(InMemoryThreadStore::default());
        let club = ProfileRef::new(Uuid::new_v4(), ProfileRole::Club);
        let player = ProfileRef::new(Uuid::new_v4(), ProfileRole::Player);
        let message = Message::new(club, player.profile_id, CONTENT);
        let thread = message.thread;
        store.append(message);
        (ThreadView::new(store), club, player, thread)
    }

    #[test]
    fn test_sender_sees_own_content() {
        let (view, club, _player, thread) = seeded();
        let sender = ViewerIdentity::new(club.profile_id, ViewerRole::Club);

        let messages = view.messages_for(&sender, &thread);
        assert_eq!(messages[0].content, CONTENT);
        assert!(!messages[0].redacted);
    }

    #[test]
    fn test_non_premium_recipient_sees_redacted() {
        let (view, _club, player, thread) = seeded();
        let recipient = ViewerIdentity::new(player.profile_id, ViewerRole::Player);

        let messages = view.messages_for(&recipient, &thread);
        assert!(messages[0].redacted);
        assert_eq!(
            messages[0].content,
            "me chama no  (**) *****-****  ou @*********"
        );
    }

    #[test]
    fn test_premium_recipient_sees_raw() {
        let (view, _club, player, thread) = seeded();
        let recipient = ViewerIdentity::new(player.profile_id, ViewerRole::Player).premium();

        let messages = view.messages_for(&recipient, &thread);
        assert_eq!(messages[0].content, CONTENT);
    }

    #[test]
    fn test_admin_sees_raw() {
        let (view, _club, _player, thread) = seeded();
        let admin = ViewerIdentity::new(Uuid::new_v4(), ViewerRole::None).admin();

        let messages = view.messages_for(&admin, &thread);
        assert!(!messages[0].redacted);
    }

    #[test]
    fn test_recorded_sender_role_decides_redaction() {
        let store = Arc::new(InMemoryThreadStore::default());
        let sender = ProfileRef::new(Uuid::new_v4(), ProfileRole::Player);
        let message = Message::new(sender, Uuid::new_v4(), "contato@exemplo.com");
        let thread = message.thread;
        store.append(message);
        let view = ThreadView::new(store);

        let observer = ViewerIdentity::new(Uuid::new_v4(), ViewerRole::Player).premium();
        let messages = view.messages_for(&observer, &thread);
        assert_eq!(messages[0].content, "*******@*******.***");
    }
}
