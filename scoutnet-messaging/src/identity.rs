//! Source of the current viewer identity
//!
//! The session layer owns authentication; the guard only asks it for the
//! identity record at the moment of each check.

use parking_lot::RwLock;

use scoutnet_common::types::ViewerIdentity;

/// Supplies the verified viewer identity and live entitlements
pub trait IdentitySource {
    /// Fetch the identity as of now. Called once per authorization check.
    fn current_viewer(&self) -> ViewerIdentity;
}

/// A record that was verified for the current request
impl IdentitySource for ViewerIdentity {
    fn current_viewer(&self) -> ViewerIdentity {
        self.clone()
    }
}

/// Identity whose entitlements can change between requests
#[derive(Debug)]
pub struct StaticIdentity {
    identity: RwLock<ViewerIdentity>,
}

impl StaticIdentity {
    pub fn new(identity: ViewerIdentity) -> Self {
        Self {
            identity: RwLock::new(identity),
        }
    }

    pub fn set_premium(&self, is_premium: bool) {
        self.identity.write().is_premium = is_premium;
    }

    pub fn set_admin(&self, is_admin: bool) {
        self.identity.write().is_admin = is_admin;
    }
}

impl IdentitySource for StaticIdentity {
    fn current_viewer(&self) -> ViewerIdentity {
        self.identity.read().clone()
    }
}
