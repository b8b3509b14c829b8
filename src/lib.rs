//! In-memory project dashboard backend: projects, tasks, team members and
//! settings held in a single-writer state container, served over REST and
//! GraphQL.

pub mod app;
pub mod config;
pub mod entities;
pub mod error;
pub mod extract;
pub mod graphql;
pub mod labels;
pub mod routes;
pub mod services;
pub mod store;

pub use app::{build_router, AppState};
pub use config::{Latency, ServerConfig};
pub use error::{AppError, AppResult};
pub use store::{Action, Snapshot, Store};
