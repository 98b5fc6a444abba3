//! Workout Entity
//!
//! A workout belongs to exactly one user and owns an ordered list of entries.
//!
//! ## 不変条件
//! - タイトルは空白のみ不可、255文字以内
//! - 時間・消費カロリーは 0 以上
//! - 各エントリは回数（reps）か秒数（duration_seconds）のどちらか一方だけを持つ

use chrono::{DateTime, Utc};
use kernel::id::{UserId, WorkoutId};

use crate::error::{WorkoutError, WorkoutResult};

/// Maximum title / exercise name length (matches the column width)
pub const NAME_MAX_LENGTH: usize = 255;

// ============================================================================
// Entry
// ============================================================================

/// How an exercise was measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMeasure {
    /// Repetitions per set
    Reps(i32),
    /// Seconds per set
    DurationSeconds(i32),
}

impl EntryMeasure {
    /// Build from the two nullable wire/storage columns
    ///
    /// Exactly one of them must be present.
    pub fn from_parts(reps: Option<i32>, duration_seconds: Option<i32>) -> WorkoutResult<Self> {
        match (reps, duration_seconds) {
            (Some(reps), None) if reps > 0 => Ok(Self::Reps(reps)),
            (None, Some(seconds)) if seconds > 0 => Ok(Self::DurationSeconds(seconds)),
            (Some(_), None) => Err(WorkoutError::validation("reps must be positive")),
            (None, Some(_)) => Err(WorkoutError::validation(
                "duration_seconds must be positive",
            )),
            _ => Err(WorkoutError::validation(
                "entry must specify exactly one of reps or duration_seconds",
            )),
        }
    }

    pub fn reps(&self) -> Option<i32> {
        match self {
            Self::Reps(reps) => Some(*reps),
            Self::DurationSeconds(_) => None,
        }
    }

    pub fn duration_seconds(&self) -> Option<i32> {
        match self {
            Self::DurationSeconds(seconds) => Some(*seconds),
            Self::Reps(_) => None,
        }
    }
}

/// One exercise within a workout
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutEntry {
    pub exercise_name: String,
    pub sets: i32,
    pub measure: EntryMeasure,
    pub weight: Option<f64>,
    pub notes: String,
    pub order_index: i32,
}

impl WorkoutEntry {
    /// Validate and build an entry
    pub fn new(
        exercise_name: String,
        sets: i32,
        measure: EntryMeasure,
        weight: Option<f64>,
        notes: String,
        order_index: i32,
    ) -> WorkoutResult<Self> {
        let exercise_name = exercise_name.trim().to_string();
        validate_name(&exercise_name, "exercise_name")?;

        if sets <= 0 {
            return Err(WorkoutError::validation("sets must be positive"));
        }

        if let Some(weight) = weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(WorkoutError::validation(
                    "weight must be a non-negative number",
                ));
            }
        }

        Ok(Self {
            exercise_name,
            sets,
            measure,
            weight,
            notes,
            order_index,
        })
    }
}

// ============================================================================
// Workout
// ============================================================================

/// Persisted workout
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutId,
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub entries: Vec<WorkoutEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Workout {
    /// Apply a partial update
    ///
    /// Absent fields keep their value; `entries: Some(..)` replaces the whole list.
    pub fn apply(&mut self, patch: WorkoutPatch) -> WorkoutResult<()> {
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(duration_minutes) = patch.duration_minutes {
            self.duration_minutes = duration_minutes;
        }
        if let Some(calories_burned) = patch.calories_burned {
            self.calories_burned = calories_burned;
        }
        if let Some(entries) = patch.entries {
            self.entries = in_order(entries);
        }

        validate_summary(&self.title, self.duration_minutes, self.calories_burned)?;
        self.updated_at = Utc::now();

        Ok(())
    }
}

/// A validated workout that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub user_id: UserId,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub entries: Vec<WorkoutEntry>,
}

impl NewWorkout {
    pub fn new(
        user_id: UserId,
        title: String,
        description: String,
        duration_minutes: i32,
        calories_burned: i32,
        entries: Vec<WorkoutEntry>,
    ) -> WorkoutResult<Self> {
        let title = title.trim().to_string();
        validate_summary(&title, duration_minutes, calories_burned)?;

        Ok(Self {
            user_id,
            title,
            description,
            duration_minutes,
            calories_burned,
            entries: in_order(entries),
        })
    }
}

/// Partial update; every field is optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
    pub entries: Option<Vec<WorkoutEntry>>,
}

// ============================================================================
// Validation helpers
// ============================================================================

fn validate_name(value: &str, field: &str) -> WorkoutResult<()> {
    if value.is_empty() {
        return Err(WorkoutError::validation(format!("{field} is required")));
    }
    if value.chars().count() > NAME_MAX_LENGTH {
        return Err(WorkoutError::validation(format!(
            "{field} must be at most {NAME_MAX_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_summary(title: &str, duration_minutes: i32, calories_burned: i32) -> WorkoutResult<()> {
    validate_name(title, "title")?;
    if duration_minutes < 0 {
        return Err(WorkoutError::validation(
            "duration_minutes must not be negative",
        ));
    }
    if calories_burned < 0 {
        return Err(WorkoutError::validation(
            "calories_burned must not be negative",
        ));
    }
    Ok(())
}

/// Stable sort by `order_index`
fn in_order(mut entries: Vec<WorkoutEntry>) -> Vec<WorkoutEntry> {
    entries.sort_by_key(|e| e.order_index);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, measure: EntryMeasure, order_index: i32) -> WorkoutEntry {
        WorkoutEntry::new(name.into(), 3, measure, None, String::new(), order_index).unwrap()
    }

    fn workout() -> Workout {
        let now = Utc::now();
        Workout {
            id: WorkoutId::new(1),
            user_id: UserId::new(1),
            title: "A".into(),
            description: String::new(),
            duration_minutes: 30,
            calories_burned: 200,
            entries: vec![entry("Squat", EntryMeasure::Reps(5), 1)],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_measure_requires_exactly_one() {
        assert_eq!(
            EntryMeasure::from_parts(Some(10), None).unwrap(),
            EntryMeasure::Reps(10)
        );
        assert_eq!(
            EntryMeasure::from_parts(None, Some(60)).unwrap(),
            EntryMeasure::DurationSeconds(60)
        );

        let both = EntryMeasure::from_parts(Some(10), Some(30)).unwrap_err();
        assert_eq!(
            both.to_string(),
            "entry must specify exactly one of reps or duration_seconds"
        );
        assert!(EntryMeasure::from_parts(None, None).is_err());
        assert!(EntryMeasure::from_parts(Some(0), None).is_err());
    }

    #[test]
    fn test_entry_validation() {
        let reps = EntryMeasure::Reps(10);
        assert!(WorkoutEntry::new("  ".into(), 3, reps, None, String::new(), 1).is_err());
        assert!(WorkoutEntry::new("Row".into(), 0, reps, None, String::new(), 1).is_err());
        assert!(WorkoutEntry::new("Row".into(), 3, reps, Some(-1.0), String::new(), 1).is_err());
        assert!(
            WorkoutEntry::new("Row".into(), 3, reps, Some(f64::NAN), String::new(), 1).is_err()
        );
        assert!(WorkoutEntry::new("Row".into(), 3, reps, Some(70.5), String::new(), 1).is_ok());
    }

    #[test]
    fn test_new_workout_validation_and_ordering() {
        let created = NewWorkout::new(
            UserId::new(1),
            "  Leg day ".into(),
            String::new(),
            45,
            300,
            vec![
                entry("Lunge", EntryMeasure::Reps(12), 2),
                entry("Plank", EntryMeasure::DurationSeconds(60), 1),
            ],
        )
        .unwrap();
        assert_eq!(created.title, "Leg day");
        assert_eq!(created.entries[0].exercise_name, "Plank");

        assert!(NewWorkout::new(UserId::new(1), " ".into(), String::new(), 1, 1, vec![]).is_err());
        assert!(NewWorkout::new(UserId::new(1), "x".into(), String::new(), -1, 1, vec![]).is_err());
        assert!(NewWorkout::new(UserId::new(1), "x".into(), String::new(), 1, -1, vec![]).is_err());
    }

    #[test]
    fn test_partial_update_keeps_unspecified_fields() {
        let mut w = workout();
        w.apply(WorkoutPatch {
            duration_minutes: Some(45),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(w.title, "A");
        assert_eq!(w.duration_minutes, 45);
        assert_eq!(w.calories_burned, 200);
        assert_eq!(w.entries.len(), 1);
    }

    #[test]
    fn test_empty_entries_clears() {
        let mut w = workout();
        w.apply(WorkoutPatch {
            entries: Some(vec![]),
            ..Default::default()
        })
        .unwrap();
        assert!(w.entries.is_empty());
    }

    #[test]
    fn test_patch_cannot_blank_title() {
        let mut w = workout();
        assert!(
            w.apply(WorkoutPatch {
                title: Some("   ".into()),
                ..Default::default()
            })
            .is_err()
        );
    }
}
