//! Thread storage

use std::collections::{HashMap, VecDeque};

use parking_lot::RwLock;
use tracing::debug;

use scoutnet_common::config::MessagingConfig;

use crate::message::{Message, ThreadKey};

/// Where threads live. Implementations own their own consistency.
pub trait ThreadStore: Send + Sync {
    /// Append a message to its thread
    fn append(&self, message: Message);

    /// Messages of a thread, oldest first
    fn messages(&self, thread: &ThreadKey) -> Vec<Message>;
}

/// In-memory store keeping the most recent messages of each thread
///
/// Each thread holds at most `message_buffer_size` messages. Threads are
/// never dropped, so the map grows with the number of distinct participant
/// pairs for the life of the store.
pub struct InMemoryThreadStore {
    threads: RwLock<HashMap<ThreadKey, VecDeque<Message>>>,
    buffer_size: usize,
}

impl InMemoryThreadStore {
    /// Create a new store
    pub fn new(config: &MessagingConfig) -> Self {
        Self {
            threads: RwLock::new(HashMap::new()),
            buffer_size: config.message_buffer_size.max(1),
        }
    }

    /// Number of threads with at least one message
    pub fn thread_count(&self) -> usize {
        self.threads.read().len()
    }
}

impl Default for InMemoryThreadStore {
    fn default() -> Self {
        Self::new(&MessagingConfig::default())
    }
}

impl ThreadStore for InMemoryThreadStore {
    fn append(&self, message: Message) {
        let mut threads = self.threads.write();
        let thread = threads.entry(message.thread).or_default();

        thread.push_back(message);
        while thread.len() > self.buffer_size {
            if let Some(evicted) = thread.pop_front() {
                debug!(message_id = %evicted.id, "Evicted message from thread buffer");
            }
        }
    }

    fn messages(&self, thread: &ThreadKey) -> Vec<Message> {
        self.threads
            .read()
            .get(thread)
            .map(|messages| messages.iter().cloned().collect())
            .unwrap_or_default()
    }
}
