//! Domain Layer
//!
//! Contains entities and repository traits.

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::workout::{EntryMeasure, NewWorkout, Workout, WorkoutEntry, WorkoutPatch};
pub use repository::WorkoutRepository;
