//! Application Router
//!
//! Merges the feature routers, wraps them in the auth gate and adds the
//! HTTP-level layers.

use std::sync::Arc;
use std::time::Duration;

use auth::domain::repository::{TokenRepository, UserRepository};
use auth::{AuthConfig, auth_router, authenticate};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::{Router, middleware};
use kernel::error::app_error::AppError;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use workout::domain::repository::WorkoutRepository;
use workout::workout_router;

/// Requests running longer than this are answered with 408
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Largest accepted request body (1 MiB)
pub const MAX_BODY_SIZE: usize = 1024 * 1024;

/// All routes behind the auth gate
///
/// Every request passes `authenticate`; routes that need a user add
/// `require_user` themselves.
pub fn router<A, W>(
    auth_repo: Arc<A>,
    workout_repo: Arc<W>,
    auth_config: Arc<AuthConfig>,
) -> Router
where
    A: UserRepository + TokenRepository + Clone + Send + Sync + 'static,
    W: WorkoutRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(auth_router(auth_repo.clone(), auth_config))
        .merge(workout_router(workout_repo))
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(auth_repo, authenticate::<A>))
}

/// Tracing, timeout, body limit and CORS
pub fn with_http_layers(router: Router, cors_origins: Vec<HeaderValue>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    router
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn fallback() -> AppError {
    AppError::not_found("the requested resource could not be found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::InMemoryAuthRepository;
    use axum::body::Body;
    use axum::http::Request;
    use axum::response::Response;
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use workout::InMemoryWorkoutRepository;

    fn app() -> Router {
        let app = router(
            Arc::new(InMemoryAuthRepository::new()),
            Arc::new(InMemoryWorkoutRepository::new()),
            Arc::new(AuthConfig::default()),
        );
        with_http_layers(app, vec![HeaderValue::from_static("http://localhost:3000")])
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_full_session_flow() {
        let app = app();

        let response = send(
            &app,
            Method::POST,
            "/users",
            Some(json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "secret1"
            })),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = send(
            &app,
            Method::POST,
            "/auth/sign-in",
            Some(json!({ "username": "alice", "password": "secret1" })),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let token = body_json(response).await["token"]
            .as_str()
            .unwrap()
            .to_string();

        let response = send(
            &app,
            Method::POST,
            "/workouts",
            Some(json!({ "title": "Run", "duration_minutes": 20, "calories_burned": 180 })),
            Some(&token),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let data = &body_json(response).await["data"];
        assert_eq!(data["user_id"], 1);

        let response = send(&app, Method::POST, "/auth/sign-out", None, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(&app, Method::GET, "/workouts/1", None, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_unknown_route_uses_error_envelope() {
        let response = send(&app(), Method::GET, "/nope", None, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await["error"],
            "the requested resource could not be found"
        );
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_configured_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/workouts")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:3000"))
        );
    }
}
