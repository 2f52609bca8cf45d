//! Messaging for Scoutnet
//!
//! - [`MessagingGuard`]: the single point where a composed message is
//!   authorized, stamped, and appended to its thread
//! - [`ThreadStore`]: where threads live; [`InMemoryThreadStore`] keeps a
//!   bounded buffer per thread
//! - [`ThreadView`]: every read of a thread, redacted for the observer

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod guard;
pub mod identity;
pub mod message;
pub mod store;
pub mod view;

pub use guard::{InboundRejected, MessagingGuard};
pub use identity::{IdentitySource, StaticIdentity};
pub use message::{Message, MessageAccepted, ThreadKey};
pub use store::{InMemoryThreadStore, ThreadStore};
pub use view::{ThreadView, VisibleMessage};
