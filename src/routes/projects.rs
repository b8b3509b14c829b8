use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::app::AppState;
use crate::entities::{Project, Task, TeamMember};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::services::ProjectInput;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/projects/{id}/tasks", get(project_tasks))
        .route("/projects/{id}/members", get(project_members))
}

async fn list_projects(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(state.project_service.list_projects().await)
}

async fn get_project(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<Project>> {
    Ok(Json(state.project_service.get_project(&id).await?))
}

async fn create_project(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProjectInput>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = state.project_service.create_project(input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<ProjectInput>,
) -> AppResult<Json<Project>> {
    Ok(Json(state.project_service.update_project(&id, input).await?))
}

async fn delete_project(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.project_service.delete_project(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn project_tasks(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<Vec<Task>>> {
    Ok(Json(state.project_service.get_project_tasks(&id).await?))
}

async fn project_members(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<TeamMember>>> {
    Ok(Json(state.project_service.get_project_members(&id).await?))
}
