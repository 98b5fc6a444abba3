//! Get Workout Use Case

use std::sync::Arc;

use kernel::id::WorkoutId;

use crate::domain::entity::workout::Workout;
use crate::domain::repository::WorkoutRepository;
use crate::error::{WorkoutError, WorkoutResult};

/// Get workout use case
pub struct GetWorkoutUseCase<W>
where
    W: WorkoutRepository,
{
    repo: Arc<W>,
}

impl<W> GetWorkoutUseCase<W>
where
    W: WorkoutRepository,
{
    pub fn new(repo: Arc<W>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: WorkoutId) -> WorkoutResult<Workout> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(WorkoutError::NotFound)
    }
}
