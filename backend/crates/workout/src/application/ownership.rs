//! Ownership Check
//!
//! Existence is decided before ownership: a missing workout is 404 even for a
//! caller who could never have owned it.

use kernel::id::{UserId, WorkoutId};

use crate::domain::repository::WorkoutRepository;
use crate::error::{WorkoutError, WorkoutResult};

/// Fail unless `caller` owns workout `id`
pub async fn ensure_owner<W>(repo: &W, id: WorkoutId, caller: UserId) -> WorkoutResult<()>
where
    W: WorkoutRepository,
{
    let owner = repo.find_owner(id).await?.ok_or(WorkoutError::NotFound)?;

    if owner != caller {
        tracing::warn!(
            workout_id = %id,
            owner_id = %owner,
            caller_id = %caller,
            "Ownership check failed"
        );
        return Err(WorkoutError::Forbidden);
    }

    Ok(())
}
