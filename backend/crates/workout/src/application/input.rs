//! Use-Case Inputs
//!
//! Unvalidated field sets as they arrive from the presentation layer.

use crate::domain::entity::workout::{EntryMeasure, WorkoutEntry};
use crate::error::WorkoutResult;

/// One exercise as submitted
#[derive(Debug, Clone, Default)]
pub struct EntryInput {
    pub exercise_name: String,
    pub sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    pub notes: String,
    pub order_index: i32,
}

impl EntryInput {
    pub fn into_entry(self) -> WorkoutResult<WorkoutEntry> {
        let measure = EntryMeasure::from_parts(self.reps, self.duration_seconds)?;
        WorkoutEntry::new(
            self.exercise_name,
            self.sets,
            measure,
            self.weight,
            self.notes,
            self.order_index,
        )
    }
}

/// Validate every entry, failing on the first bad one
pub fn into_entries(inputs: Vec<EntryInput>) -> WorkoutResult<Vec<WorkoutEntry>> {
    inputs.into_iter().map(EntryInput::into_entry).collect()
}

/// Fields of a new workout
#[derive(Debug, Clone, Default)]
pub struct CreateWorkoutInput {
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub entries: Vec<EntryInput>,
}

/// Partial update; `None` leaves the field alone
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkoutInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
    pub entries: Option<Vec<EntryInput>>,
}
