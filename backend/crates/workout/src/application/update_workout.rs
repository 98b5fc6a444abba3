//! Update Workout Use Case
//!
//! received → identity-resolved → resource-located → ownership-checked →
//! mutation-applied → persisted. Any failure ends the request.

use std::sync::Arc;

use kernel::id::{UserId, WorkoutId};

use crate::application::input::{UpdateWorkoutInput, into_entries};
use crate::application::ownership::ensure_owner;
use crate::domain::entity::workout::{Workout, WorkoutPatch};
use crate::domain::repository::WorkoutRepository;
use crate::error::{WorkoutError, WorkoutResult};

/// Update workout use case
pub struct UpdateWorkoutUseCase<W>
where
    W: WorkoutRepository,
{
    repo: Arc<W>,
}

impl<W> UpdateWorkoutUseCase<W>
where
    W: WorkoutRepository,
{
    pub fn new(repo: Arc<W>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        caller: UserId,
        id: WorkoutId,
        input: UpdateWorkoutInput,
    ) -> WorkoutResult<Workout> {
        ensure_owner(self.repo.as_ref(), id, caller).await?;

        let mut workout = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(WorkoutError::NotFound)?;

        let patch = WorkoutPatch {
            title: input.title,
            description: input.description,
            duration_minutes: input.duration_minutes,
            calories_burned: input.calories_burned,
            entries: input.entries.map(into_entries).transpose()?,
        };
        workout.apply(patch)?;

        self.repo.update(&workout).await?;

        tracing::info!(
            workout_id = %workout.id,
            user_id = %caller,
            entries = workout.entries.len(),
            "Workout updated"
        );

        Ok(workout)
    }
}
