//! In-Memory Repository
//!
//! Same contract as [`PgWorkoutRepository`](super::postgres::PgWorkoutRepository).
//! Backs the use-case and router tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::{UserId, WorkoutId};
use tokio::sync::RwLock;

use crate::domain::entity::workout::{NewWorkout, Workout};
use crate::domain::repository::WorkoutRepository;
use crate::error::{WorkoutError, WorkoutResult};

#[derive(Default)]
struct State {
    workouts: BTreeMap<WorkoutId, Workout>,
    last_id: i64,
}

/// Process-local workout repository
#[derive(Clone, Default)]
pub struct InMemoryWorkoutRepository {
    state: Arc<RwLock<State>>,
}

impl InMemoryWorkoutRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkoutRepository for InMemoryWorkoutRepository {
    async fn create(&self, workout: NewWorkout) -> WorkoutResult<Workout> {
        let mut state = self.state.write().await;

        state.last_id += 1;
        let now = Utc::now();
        let created = Workout {
            id: WorkoutId::new(state.last_id),
            user_id: workout.user_id,
            title: workout.title,
            description: workout.description,
            duration_minutes: workout.duration_minutes,
            calories_burned: workout.calories_burned,
            entries: workout.entries,
            created_at: now,
            updated_at: now,
        };
        state.workouts.insert(created.id, created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: WorkoutId) -> WorkoutResult<Option<Workout>> {
        let state = self.state.read().await;
        Ok(state.workouts.get(&id).cloned())
    }

    async fn find_owner(&self, id: WorkoutId) -> WorkoutResult<Option<UserId>> {
        let state = self.state.read().await;
        Ok(state.workouts.get(&id).map(|w| w.user_id))
    }

    async fn update(&self, workout: &Workout) -> WorkoutResult<()> {
        let mut state = self.state.write().await;
        let stored = state
            .workouts
            .get_mut(&workout.id)
            .ok_or(WorkoutError::NotFound)?;
        *stored = workout.clone();
        Ok(())
    }

    async fn delete(&self, id: WorkoutId) -> WorkoutResult<bool> {
        let mut state = self.state.write().await;
        Ok(state.workouts.remove(&id).is_some())
    }
}
