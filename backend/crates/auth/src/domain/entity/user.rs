//! User Entity
//!
//! Core user record. The password digest lives here but never leaves the crate
//! through a response DTO.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Database-issued identifier
    pub id: UserId,
    /// User name (unique, used for sign-in)
    pub user_name: UserName,
    /// Email address (unique)
    pub email: Email,
    /// Argon2id digest
    pub password_hash: UserPassword,
    /// Free text, empty by default
    pub bio: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Replace the email
    pub fn set_email(&mut self, email: Email) {
        self.email = email;
        self.touch();
    }

    /// Replace the bio
    pub fn set_bio(&mut self, bio: String) {
        self.bio = bio;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A validated user that has not been persisted yet
///
/// The identifier and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub email: Email,
    pub password_hash: UserPassword,
    pub bio: String,
}
