use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::app::AppState;
use crate::entities::{AppConfig, ConfigPatch};
use crate::error::AppResult;
use crate::extract::AppJson;

pub fn router() -> Router<AppState> {
    Router::new().route("/config", get(get_config).patch(update_config))
}

async fn get_config(State(state): State<AppState>) -> Json<AppConfig> {
    Json(state.config_service.get_config().await)
}

async fn update_config(
    State(state): State<AppState>,
    AppJson(patch): AppJson<ConfigPatch>,
) -> AppResult<Json<AppConfig>> {
    Ok(Json(state.config_service.update_config(patch).await?))
}
