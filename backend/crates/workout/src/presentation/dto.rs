//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::{CreateWorkoutInput, EntryInput, UpdateWorkoutInput};
use crate::domain::entity::workout::{Workout, WorkoutEntry};

// ============================================================================
// Requests
// ============================================================================

/// Entry as submitted; omitted fields take their zero value
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EntryRequest {
    pub exercise_name: String,
    pub sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    pub notes: String,
    pub order_index: i32,
}

impl From<EntryRequest> for EntryInput {
    fn from(req: EntryRequest) -> Self {
        Self {
            exercise_name: req.exercise_name,
            sets: req.sets,
            reps: req.reps,
            duration_seconds: req.duration_seconds,
            weight: req.weight,
            notes: req.notes,
            order_index: req.order_index,
        }
    }
}

/// POST /workouts body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateWorkoutRequest {
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub entries: Vec<EntryRequest>,
}

impl From<CreateWorkoutRequest> for CreateWorkoutInput {
    fn from(req: CreateWorkoutRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            duration_minutes: req.duration_minutes,
            calories_burned: req.calories_burned,
            entries: req.entries.into_iter().map(EntryInput::from).collect(),
        }
    }
}

/// PUT /workouts/{id} body
///
/// Absent (or null) fields are left unchanged. `entries: []` clears the list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateWorkoutRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
    pub entries: Option<Vec<EntryRequest>>,
}

impl From<UpdateWorkoutRequest> for UpdateWorkoutInput {
    fn from(req: UpdateWorkoutRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            duration_minutes: req.duration_minutes,
            calories_burned: req.calories_burned,
            entries: req
                .entries
                .map(|entries| entries.into_iter().map(EntryInput::from).collect()),
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    pub exercise_name: String,
    pub sets: i32,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub weight: Option<f64>,
    pub notes: String,
    pub order_index: i32,
}

impl From<WorkoutEntry> for EntryResponse {
    fn from(entry: WorkoutEntry) -> Self {
        Self {
            reps: entry.measure.reps(),
            duration_seconds: entry.measure.duration_seconds(),
            exercise_name: entry.exercise_name,
            sets: entry.sets,
            weight: entry.weight,
            notes: entry.notes,
            order_index: entry.order_index,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkoutResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub entries: Vec<EntryResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Workout> for WorkoutResponse {
    fn from(workout: Workout) -> Self {
        Self {
            id: workout.id.get(),
            user_id: workout.user_id.get(),
            title: workout.title,
            description: workout.description,
            duration_minutes: workout.duration_minutes,
            calories_burned: workout.calories_burned,
            entries: workout
                .entries
                .into_iter()
                .map(EntryResponse::from)
                .collect(),
            created_at: workout.created_at,
            updated_at: workout.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::workout::EntryMeasure;
    use serde_json::json;

    #[test]
    fn test_create_request_defaults_missing_fields() {
        let req: CreateWorkoutRequest =
            serde_json::from_value(json!({ "title": "Leg day" })).unwrap();

        assert_eq!(req.title, "Leg day");
        assert_eq!(req.description, "");
        assert_eq!(req.duration_minutes, 0);
        assert!(req.entries.is_empty());
    }

    #[test]
    fn test_update_request_distinguishes_absent_and_empty_entries() {
        let absent: UpdateWorkoutRequest = serde_json::from_value(json!({})).unwrap();
        assert!(absent.entries.is_none());

        let empty: UpdateWorkoutRequest =
            serde_json::from_value(json!({ "entries": [] })).unwrap();
        assert_eq!(empty.entries.map(|e| e.len()), Some(0));
    }

    #[test]
    fn test_entry_response_exposes_only_its_measure() {
        let entry = WorkoutEntry::new(
            "Plank".into(),
            3,
            EntryMeasure::DurationSeconds(60),
            None,
            String::new(),
            0,
        )
        .unwrap();

        let json = serde_json::to_value(EntryResponse::from(entry)).unwrap();
        assert_eq!(json["duration_seconds"], 60);
        assert!(json["reps"].is_null());
        assert!(json["weight"].is_null());
    }
}
