use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::app::AppState;
use crate::store::Snapshot;
use crate::store::views::{self, DashboardMetrics, RECENT_TASKS, TaskRow};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route("/state", get(snapshot))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardResponse {
    metrics: DashboardMetrics,
    recent_tasks: Vec<TaskRow>,
}

async fn dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let response = state
        .store
        .read(|s| DashboardResponse {
            metrics: views::dashboard_metrics(s, Utc::now(), &mut rand::rng()),
            recent_tasks: views::recent_tasks(s, RECENT_TASKS),
        })
        .await;

    Json(response)
}

async fn snapshot(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.store.snapshot().await)
}
