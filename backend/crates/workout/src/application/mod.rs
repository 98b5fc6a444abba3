//! Application Layer
//!
//! Use cases for workouts. Every use case takes the caller's id as a value;
//! resolving it is the auth gate's job.

pub mod create_workout;
pub mod delete_workout;
pub mod get_workout;
pub mod input;
pub mod ownership;
pub mod update_workout;

// Re-exports
pub use create_workout::CreateWorkoutUseCase;
pub use delete_workout::DeleteWorkoutUseCase;
pub use get_workout::GetWorkoutUseCase;
pub use input::{CreateWorkoutInput, EntryInput, UpdateWorkoutInput};
pub use update_workout::UpdateWorkoutUseCase;
