//! Scoutnet Common Types and Utilities
//!
//! Shared roles, identity records, configuration, and error handling for the
//! Scoutnet policy crates.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod types;

pub use config::ScoutnetConfig;
pub use error::{Error, Result};
pub use types::{ProfileRef, ProfileRole, ViewerIdentity, ViewerRole};
