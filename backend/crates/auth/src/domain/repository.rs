//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::entity::{
    token::{Token, TokenHash},
    user::{NewUser, User},
};
use crate::domain::value_object::{token_scope::TokenScope, user_name::UserName};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user and return it with its assigned id and timestamps
    ///
    /// Fails with `UserNameTaken` / `EmailTaken` on a uniqueness conflict.
    async fn create(&self, user: NewUser) -> AuthResult<User>;

    /// Find user by user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;

    /// Persist email, bio and `updated_at`
    async fn update(&self, user: &User) -> AuthResult<()>;
}

/// Token repository trait
#[trait_variant::make(TokenRepository: Send)]
pub trait LocalTokenRepository {
    /// Store a newly issued token
    async fn insert(&self, token: &Token) -> AuthResult<()>;

    /// Resolve an unexpired token in `scope` to its owner
    async fn find_user_by_token(
        &self,
        hash: &TokenHash,
        scope: TokenScope,
        now: DateTime<Utc>,
    ) -> AuthResult<Option<User>>;

    /// Delete every token of `scope` belonging to `user_id`
    async fn delete_for_user(&self, user_id: UserId, scope: TokenScope) -> AuthResult<u64>;

    /// Delete expired tokens
    async fn cleanup_expired(&self, now: DateTime<Utc>) -> AuthResult<u64>;
}
