//! Readiness endpoint

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};
use database::postgres::check_health;

use crate::state::AppState;

async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let database: HealthCheckFuture<'_> = Box::pin(async {
        match &state.db {
            Some(db) => check_health(db).await.map_err(|e| e.to_string()),
            None => Err("not connected".to_string()),
        }
    });

    run_health_checks(vec![("database", database)]).await
}

/// Router with `GET /ready`
pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
