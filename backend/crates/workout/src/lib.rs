//! Workout Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Workout entity, entries, repository trait
//! - `application/` - Create/get/update/delete use cases, ownership check
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Identity comes from the auth gate; every route requires a signed-in user.
//! Only the owner may update or delete a workout, and a missing workout is
//! reported before a foreign one.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use domain::entity::workout::{Workout, WorkoutEntry};
pub use error::{WorkoutError, WorkoutResult};
pub use infra::{memory::InMemoryWorkoutRepository, postgres::PgWorkoutRepository};
pub use presentation::router::workout_router;
