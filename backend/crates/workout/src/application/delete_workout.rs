//! Delete Workout Use Case

use std::sync::Arc;

use kernel::id::{UserId, WorkoutId};

use crate::application::ownership::ensure_owner;
use crate::domain::repository::WorkoutRepository;
use crate::error::{WorkoutError, WorkoutResult};

/// Delete workout use case
pub struct DeleteWorkoutUseCase<W>
where
    W: WorkoutRepository,
{
    repo: Arc<W>,
}

impl<W> DeleteWorkoutUseCase<W>
where
    W: WorkoutRepository,
{
    pub fn new(repo: Arc<W>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, caller: UserId, id: WorkoutId) -> WorkoutResult<()> {
        ensure_owner(self.repo.as_ref(), id, caller).await?;

        // Lost a race with another delete
        if !self.repo.delete(id).await? {
            return Err(WorkoutError::NotFound);
        }

        tracing::info!(workout_id = %id, user_id = %caller, "Workout deleted");

        Ok(())
    }
}
