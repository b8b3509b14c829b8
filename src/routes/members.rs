use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::app::AppState;
use crate::entities::{Task, TeamMember};
use crate::error::AppResult;
use crate::extract::AppJson;
use crate::services::TeamMemberInput;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/members", get(list_members).post(create_member))
        .route(
            "/members/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
        .route("/members/{id}/tasks", get(member_tasks))
}

async fn list_members(State(state): State<AppState>) -> Json<Vec<TeamMember>> {
    Json(state.team_member_service.list_team_members().await)
}

async fn get_member(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<TeamMember>> {
    Ok(Json(state.team_member_service.get_team_member(&id).await?))
}

async fn create_member(
    State(state): State<AppState>,
    AppJson(input): AppJson<TeamMemberInput>,
) -> AppResult<(StatusCode, Json<TeamMember>)> {
    let member = state.team_member_service.create_team_member(input).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<TeamMemberInput>,
) -> AppResult<Json<TeamMember>> {
    Ok(Json(state.team_member_service.update_team_member(&id, input).await?))
}

async fn delete_member(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    state.team_member_service.delete_team_member(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Works for deleted members too; their tasks are not cascaded away.
async fn member_tasks(State(state): State<AppState>, Path(id): Path<String>) -> Json<Vec<Task>> {
    Json(state.task_service.get_assigned_tasks(&id).await)
}
