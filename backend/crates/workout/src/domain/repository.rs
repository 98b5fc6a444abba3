//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{UserId, WorkoutId};

use crate::domain::entity::workout::{NewWorkout, Workout};
use crate::error::WorkoutResult;

/// Workout repository trait
#[trait_variant::make(WorkoutRepository: Send)]
pub trait LocalWorkoutRepository {
    /// Insert a workout and its entries atomically
    async fn create(&self, workout: NewWorkout) -> WorkoutResult<Workout>;

    /// Load a workout with its entries ordered by `order_index`
    async fn find_by_id(&self, id: WorkoutId) -> WorkoutResult<Option<Workout>>;

    /// Owner lookup used for authorization, without loading entries
    async fn find_owner(&self, id: WorkoutId) -> WorkoutResult<Option<UserId>>;

    /// Persist the workout row and replace all entries atomically
    ///
    /// Fails with `NotFound` if the row vanished.
    async fn update(&self, workout: &Workout) -> WorkoutResult<()>;

    /// Delete a workout; returns whether a row was removed
    async fn delete(&self, id: WorkoutId) -> WorkoutResult<bool>;
}
