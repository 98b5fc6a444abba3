//! Workout Router

use auth::require_user;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::WorkoutRepository;
use crate::presentation::handlers::{self, WorkoutAppState};

/// Create the Workout router for any repository implementation
///
/// All routes require a signed-in user. The auth gate itself must be layered
/// around the merged application router.
pub fn workout_router<W>(repo: Arc<W>) -> Router
where
    W: WorkoutRepository + Clone + Send + Sync + 'static,
{
    let state = WorkoutAppState { repo };

    Router::new()
        .route("/workouts", post(handlers::create::<W>))
        .route(
            "/workouts/{id}",
            get(handlers::get::<W>)
                .put(handlers::update::<W>)
                .delete(handlers::delete::<W>),
        )
        .route_layer(middleware::from_fn(require_user))
        .with_state(state)
}
