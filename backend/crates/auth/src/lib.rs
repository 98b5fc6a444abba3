//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router, auth gate
//!
//! ## Features
//! - Registration with username, email and password
//! - Sign-in issuing opaque bearer tokens (24h by default)
//! - Sign-out revoking every token of the caller
//! - Profile edits for the signed-in user
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Tokens are 256 random bits; only their SHA-256 digest is stored
//! - Every request passes the auth gate; protected routes require a user

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use domain::entity::{identity::Identity, user::User};
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::extract::CurrentUser;
pub use presentation::middleware::{authenticate, require_user};
pub use presentation::router::auth_router;
