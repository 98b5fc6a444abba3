//! PostgreSQL Repository Implementation
//!
//! A workout and its entries are always written in one transaction.

use chrono::{DateTime, Utc};
use kernel::id::{UserId, WorkoutId};
use sqlx::{PgConnection, PgPool};

use crate::domain::entity::workout::{EntryMeasure, NewWorkout, Workout, WorkoutEntry};
use crate::domain::repository::WorkoutRepository;
use crate::error::{WorkoutError, WorkoutResult};

/// PostgreSQL-backed workout repository
#[derive(Clone)]
pub struct PgWorkoutRepository {
    pool: PgPool,
}

impl PgWorkoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_entries(&self, workout_id: WorkoutId) -> WorkoutResult<Vec<WorkoutEntry>> {
        let rows = sqlx::query_as::<_, EntryRow>(
            r#"
            SELECT exercise_name, sets, reps, duration_seconds, weight, notes, order_index
            FROM workout_entries
            WHERE workout_id = $1
            ORDER BY order_index, id
            "#,
        )
        .bind(workout_id.get())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(EntryRow::into_entry).collect()
    }
}

async fn insert_entries(
    conn: &mut PgConnection,
    workout_id: WorkoutId,
    entries: &[WorkoutEntry],
) -> WorkoutResult<()> {
    for entry in entries {
        sqlx::query(
            r#"
            INSERT INTO workout_entries
                (workout_id, exercise_name, sets, reps, duration_seconds, weight, notes, order_index)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(workout_id.get())
        .bind(&entry.exercise_name)
        .bind(entry.sets)
        .bind(entry.measure.reps())
        .bind(entry.measure.duration_seconds())
        .bind(entry.weight)
        .bind(&entry.notes)
        .bind(entry.order_index)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

impl WorkoutRepository for PgWorkoutRepository {
    async fn create(&self, workout: NewWorkout) -> WorkoutResult<Workout> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, WorkoutRow>(
            r#"
            INSERT INTO workouts (user_id, title, description, duration_minutes, calories_burned)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, title, description, duration_minutes, calories_burned,
                      created_at, updated_at
            "#,
        )
        .bind(workout.user_id.get())
        .bind(&workout.title)
        .bind(&workout.description)
        .bind(workout.duration_minutes)
        .bind(workout.calories_burned)
        .fetch_one(&mut *tx)
        .await?;

        let id = WorkoutId::new(row.id);
        insert_entries(&mut tx, id, &workout.entries).await?;

        tx.commit().await?;

        Ok(row.into_workout(workout.entries))
    }

    async fn find_by_id(&self, id: WorkoutId) -> WorkoutResult<Option<Workout>> {
        let row = sqlx::query_as::<_, WorkoutRow>(
            r#"
            SELECT id, user_id, title, description, duration_minutes, calories_burned,
                   created_at, updated_at
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let entries = self.load_entries(id).await?;
        Ok(Some(row.into_workout(entries)))
    }

    async fn find_owner(&self, id: WorkoutId) -> WorkoutResult<Option<UserId>> {
        let owner = sqlx::query_scalar::<_, i64>("SELECT user_id FROM workouts WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        Ok(owner.map(UserId::new))
    }

    async fn update(&self, workout: &Workout) -> WorkoutResult<()> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE workouts SET
                title = $2,
                description = $3,
                duration_minutes = $4,
                calories_burned = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(workout.id.get())
        .bind(&workout.title)
        .bind(&workout.description)
        .bind(workout.duration_minutes)
        .bind(workout.calories_burned)
        .bind(workout.updated_at)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(WorkoutError::NotFound);
        }

        sqlx::query("DELETE FROM workout_entries WHERE workout_id = $1")
            .bind(workout.id.get())
            .execute(&mut *tx)
            .await?;

        insert_entries(&mut tx, workout.id, &workout.entries).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn delete(&self, id: WorkoutId) -> WorkoutResult<bool> {
        // Entries go with the row (ON DELETE CASCADE)
        let deleted = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct WorkoutRow {
    id: i64,
    user_id: i64,
    title: String,
    description: String,
    duration_minutes: i32,
    calories_burned: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WorkoutRow {
    fn into_workout(self, entries: Vec<WorkoutEntry>) -> Workout {
        Workout {
            id: WorkoutId::new(self.id),
            user_id: UserId::new(self.user_id),
            title: self.title,
            description: self.description,
            duration_minutes: self.duration_minutes,
            calories_burned: self.calories_burned,
            entries,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct EntryRow {
    exercise_name: String,
    sets: i32,
    reps: Option<i32>,
    duration_seconds: Option<i32>,
    weight: Option<f64>,
    notes: String,
    order_index: i32,
}

impl EntryRow {
    fn into_entry(self) -> WorkoutResult<WorkoutEntry> {
        let measure = EntryMeasure::from_parts(self.reps, self.duration_seconds)
            .map_err(|e| WorkoutError::Internal(format!("stored entry is invalid: {e}")))?;

        Ok(WorkoutEntry {
            exercise_name: self.exercise_name,
            sets: self.sets,
            measure,
            weight: self.weight,
            notes: self.notes,
            order_index: self.order_index,
        })
    }
}
