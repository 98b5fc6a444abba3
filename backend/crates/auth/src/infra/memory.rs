//! In-Memory Repository
//!
//! Same contract as [`PgAuthRepository`](super::postgres::PgAuthRepository),
//! including uniqueness conflicts. Backs the router and use-case tests of this
//! crate and of crates that sit behind the auth gate.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use tokio::sync::RwLock;

use crate::domain::entity::{
    token::{Token, TokenHash},
    user::{NewUser, User},
};
use crate::domain::repository::{TokenRepository, UserRepository};
use crate::domain::value_object::{token_scope::TokenScope, user_name::UserName};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct State {
    users: Vec<User>,
    tokens: Vec<Token>,
    last_id: i64,
}

/// Process-local auth repository
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn create(&self, user: NewUser) -> AuthResult<User> {
        let mut state = self.state.write().await;

        if state.users.iter().any(|u| u.user_name == user.user_name) {
            return Err(AuthError::UserNameTaken);
        }
        if state.users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }

        state.last_id += 1;
        let now = Utc::now();
        let created = User {
            id: UserId::new(state.last_id),
            user_name: user.user_name,
            email: user.email,
            password_hash: user.password_hash,
            bio: user.bio,
            created_at: now,
            updated_at: now,
        };
        state.users.push(created.clone());

        Ok(created)
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state
            .users
            .iter()
            .find(|u| &u.user_name == user_name)
            .cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        let state = self.state.read().await;
        Ok(state.users.iter().any(|u| &u.user_name == user_name))
    }

    async fn update(&self, user: &User) -> AuthResult<()> {
        let mut state = self.state.write().await;

        if state
            .users
            .iter()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(AuthError::EmailTaken);
        }

        if let Some(stored) = state.users.iter_mut().find(|u| u.id == user.id) {
            stored.email = user.email.clone();
            stored.bio = user.bio.clone();
            stored.updated_at = user.updated_at;
        }

        Ok(())
    }
}

impl TokenRepository for InMemoryAuthRepository {
    async fn insert(&self, token: &Token) -> AuthResult<()> {
        self.state.write().await.tokens.push(token.clone());
        Ok(())
    }

    async fn find_user_by_token(
        &self,
        hash: &TokenHash,
        scope: TokenScope,
        now: DateTime<Utc>,
    ) -> AuthResult<Option<User>> {
        let state = self.state.read().await;

        let owner = state
            .tokens
            .iter()
            .find(|t| &t.hash == hash && t.scope == scope && !t.is_expired_at(now))
            .map(|t| t.user_id);

        Ok(owner.and_then(|id| state.users.iter().find(|u| u.id == id).cloned()))
    }

    async fn delete_for_user(&self, user_id: UserId, scope: TokenScope) -> AuthResult<u64> {
        let mut state = self.state.write().await;
        let before = state.tokens.len();
        state
            .tokens
            .retain(|t| !(t.user_id == user_id && t.scope == scope));
        Ok((before - state.tokens.len()) as u64)
    }

    async fn cleanup_expired(&self, now: DateTime<Utc>) -> AuthResult<u64> {
        let mut state = self.state.write().await;
        let before = state.tokens.len();
        state.tokens.retain(|t| !t.is_expired_at(now));
        Ok((before - state.tokens.len()) as u64)
    }
}
