//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod register_user;
pub mod sign_in;
pub mod sign_out;
pub mod token_service;
pub mod update_profile;

// Re-exports
pub use authenticate::AuthenticateUseCase;
pub use config::AuthConfig;
pub use register_user::{RegisterUserInput, RegisterUserUseCase};
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use token_service::{IssuedToken, TokenService};
pub use update_profile::{UpdateProfileInput, UpdateProfileUseCase};
