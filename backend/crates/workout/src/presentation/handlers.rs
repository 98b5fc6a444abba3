//! HTTP Handlers
//!
//! Every handler sits behind `require_user`; the caller arrives as
//! [`CurrentUser`] and is passed to the use case by id.

use auth::CurrentUser;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::envelope::Data;
use kernel::extract::{Json, Path};
use kernel::id::WorkoutId;
use std::sync::Arc;

use crate::application::{
    CreateWorkoutUseCase, DeleteWorkoutUseCase, GetWorkoutUseCase, UpdateWorkoutUseCase,
};
use crate::domain::repository::WorkoutRepository;
use crate::error::WorkoutResult;
use crate::presentation::dto::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutResponse};

/// Shared state for workout handlers
#[derive(Clone)]
pub struct WorkoutAppState<W>
where
    W: WorkoutRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<W>,
}

/// POST /workouts
pub async fn create<W>(
    State(state): State<WorkoutAppState<W>>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateWorkoutRequest>,
) -> WorkoutResult<impl IntoResponse>
where
    W: WorkoutRepository + Clone + Send + Sync + 'static,
{
    let workout = CreateWorkoutUseCase::new(state.repo.clone())
        .execute(user.id, req.into())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Data::new(WorkoutResponse::from(workout))),
    ))
}

/// GET /workouts/{id}
pub async fn get<W>(
    State(state): State<WorkoutAppState<W>>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<WorkoutId>,
) -> WorkoutResult<Json<Data<WorkoutResponse>>>
where
    W: WorkoutRepository + Clone + Send + Sync + 'static,
{
    let workout = GetWorkoutUseCase::new(state.repo.clone()).execute(id).await?;

    Ok(Json(Data::new(WorkoutResponse::from(workout))))
}

/// PUT /workouts/{id}
pub async fn update<W>(
    State(state): State<WorkoutAppState<W>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<WorkoutId>,
    Json(req): Json<UpdateWorkoutRequest>,
) -> WorkoutResult<Json<Data<WorkoutResponse>>>
where
    W: WorkoutRepository + Clone + Send + Sync + 'static,
{
    let workout = UpdateWorkoutUseCase::new(state.repo.clone())
        .execute(user.id, id, req.into())
        .await?;

    Ok(Json(Data::new(WorkoutResponse::from(workout))))
}

/// DELETE /workouts/{id}
pub async fn delete<W>(
    State(state): State<WorkoutAppState<W>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<WorkoutId>,
) -> WorkoutResult<StatusCode>
where
    W: WorkoutRepository + Clone + Send + Sync + 'static,
{
    DeleteWorkoutUseCase::new(state.repo.clone())
        .execute(user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
