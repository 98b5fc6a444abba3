//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, extractors and the auth gate.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use extract::CurrentUser;
pub use handlers::AuthAppState;
pub use middleware::{authenticate, require_user};
pub use router::auth_router;
