//! Request Identity
//!
//! Who is calling: resolved once per request by the auth gate.

use crate::domain::entity::user::User;

/// Caller identity
#[derive(Debug, Clone)]
pub enum Identity {
    /// A verified bearer token resolved to this user
    Authenticated(User),
    /// No credentials were presented
    Anonymous,
}

impl Identity {
    pub fn user(&self) -> Option<&User> {
        match self {
            Identity::Authenticated(user) => Some(user),
            Identity::Anonymous => None,
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Identity::Anonymous)
    }
}
