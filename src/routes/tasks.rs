use std::str::FromStr;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::app::AppState;
use crate::entities::{Task, TaskStatus};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::services::TaskInput;
use crate::store::views::{Page, TASKS_PER_PAGE, TaskRow};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/table", get(task_table))
        .route("/tasks/{id}", get(get_task).put(update_task).delete(delete_task))
}

#[derive(Debug, Deserialize)]
struct ListParams {
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableParams {
    page: Option<usize>,
    per_page: Option<usize>,
}

async fn list_tasks(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> AppResult<Json<Vec<Task>>> {
    let status = params
        .status
        .as_deref()
        .map(TaskStatus::from_str)
        .transpose()
        .map_err(|_| AppError::BadRequest("status must be one of pending, in-progress, completed".to_string()))?;

    Ok(Json(state.task_service.list_tasks(status).await))
}

async fn task_table(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<TableParams>,
) -> AppResult<Json<Page<TaskRow>>> {
    let page = state
        .task_service
        .get_task_page(params.page.unwrap_or(1), params.per_page.unwrap_or(TASKS_PER_PAGE))
        .await?;
    Ok(Json(page))
}

async fn get_task(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<Task>> {
    Ok(Json(state.task_service.get_task(&id).await?))
}

async fn create_task(
    State(state): State<AppState>,
    AppJson(input): AppJson<TaskInput>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = state.task_service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<TaskInput>,
) -> AppResult<Json<Task>> {
    Ok(Json(state.task_service.update_task(&id, input).await?))
}

async fn delete_task(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.task_service.delete_task(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
