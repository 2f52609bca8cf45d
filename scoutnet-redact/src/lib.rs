//! Content Redaction Engine for Scoutnet
//!
//! Masks off-platform contact details in user-written text:
//! - Email addresses
//! - Phone numbers
//! - Social handles
//! - Links
//!
//! Passes run in a fixed order on the progressively masked text, and the
//! output of [`redact`] is a fixed point of [`redact`].

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod engine;
pub mod patterns;

pub use engine::{contains_sensitive, redact, RedactableText};
pub use patterns::{
    SensitiveKind, EMAIL_PLACEHOLDER, HANDLE_PLACEHOLDER, PHONE_PLACEHOLDER, URL_PLACEHOLDER,
};
