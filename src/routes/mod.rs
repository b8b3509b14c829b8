pub mod dashboard;
pub mod members;
pub mod projects;
pub mod settings;
pub mod tasks;

use axum::Router;

use crate::app::AppState;

/// All REST resources, to be nested under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(projects::router())
        .merge(tasks::router())
        .merge(members::router())
        .merge(settings::router())
        .merge(dashboard::router())
}
