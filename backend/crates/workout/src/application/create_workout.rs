//! Create Workout Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::input::{CreateWorkoutInput, into_entries};
use crate::domain::entity::workout::{NewWorkout, Workout};
use crate::domain::repository::WorkoutRepository;
use crate::error::WorkoutResult;

/// Create workout use case
pub struct CreateWorkoutUseCase<W>
where
    W: WorkoutRepository,
{
    repo: Arc<W>,
}

impl<W> CreateWorkoutUseCase<W>
where
    W: WorkoutRepository,
{
    pub fn new(repo: Arc<W>) -> Self {
        Self { repo }
    }

    /// Create a workout owned by `owner`
    pub async fn execute(
        &self,
        owner: UserId,
        input: CreateWorkoutInput,
    ) -> WorkoutResult<Workout> {
        let new_workout = NewWorkout::new(
            owner,
            input.title,
            input.description,
            input.duration_minutes,
            input.calories_burned,
            into_entries(input.entries)?,
        )?;

        let workout = self.repo.create(new_workout).await?;

        tracing::info!(
            workout_id = %workout.id,
            user_id = %owner,
            entries = workout.entries.len(),
            "Workout created"
        );

        Ok(workout)
    }
}
