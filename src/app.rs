use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::graphql::{create_schema, ApiSchema};
use crate::routes;
use crate::services::{ConfigService, ProjectService, TaskService, TeamMemberService};
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub schema: ApiSchema,
    pub store: Store,
    pub project_service: ProjectService,
    pub task_service: TaskService,
    pub team_member_service: TeamMemberService,
    pub config_service: ConfigService,
    pub development: bool,
}

impl AppState {
    pub fn new(store: Store, config: &ServerConfig) -> Self {
        let latency = config.latency;

        Self {
            schema: create_schema(),
            project_service: ProjectService::new(store.clone(), latency),
            task_service: TaskService::new(store.clone(), latency),
            team_member_service: TeamMemberService::new(store.clone(), latency),
            config_service: ConfigService::new(store.clone(), latency),
            store,
            development: config.is_development(),
        }
    }
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    let request = req
        .into_inner()
        .data(state.store.clone())
        .data(state.project_service.clone())
        .data(state.task_service.clone())
        .data(state.team_member_service.clone())
        .data(state.config_service.clone());

    state.schema.execute(request).await.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>projectdash GraphQL Playground</title>
        <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/graphql-playground-react/build/static/css/index.css" />
    </head>
    <body>
        <div id="root"></div>
        <script src="https://cdn.jsdelivr.net/npm/graphql-playground-react/build/static/js/middleware.js"></script>
        <script>
            GraphQLPlayground.init(document.getElementById('root'), {
                endpoint: '/graphql'
            })
        </script>
    </body>
    </html>
    "#)
}

async fn health() -> impl IntoResponse {
    "OK"
}

async fn graphql_schema(State(state): State<AppState>) -> impl IntoResponse {
    // Only expose schema in development environment
    if !state.development {
        return (StatusCode::NOT_FOUND, "Schema not available in production").into_response();
    }

    info!("Schema endpoint accessed in development mode");

    ([(CONTENT_TYPE, "application/graphql")], state.schema.sdl()).into_response()
}

fn cors_layer(cors_origins: &str) -> CorsLayer {
    if cors_origins.trim() == "*" {
        warn!("CORS set to accept ANY origin (*), only use in development");
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = cors_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            CONTENT_TYPE,
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("apollo-require-preflight"),
        ])
        .allow_credentials(true)
}

/// The full HTTP surface: REST under `/api`, GraphQL, playground and health.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/playground", get(graphql_playground))
        .route("/health", get(health))
        .route("/schema.graphql", get(graphql_schema))
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
        .with_state(state)
}
