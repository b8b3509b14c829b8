pub mod config;
pub mod project;
pub mod task;
pub mod team_member;

pub use config::*;
pub use project::*;
pub use task::*;
pub use team_member::*;

use std::time::Duration;

use tokio::time::sleep;
use uuid::Uuid;

use crate::error::FieldErrors;
use crate::store::{Action, Store};

/// Simulated network round trip around a single transition: raise the
/// loading flag, wait, apply, lower the flag. Nothing cancels the wait, so
/// two quick submits apply twice. Returns whether the transition matched
/// anything once the wait was over.
pub(crate) async fn submit(store: &Store, delay: Duration, action: Action) -> bool {
    store.begin_submit().await;
    if !delay.is_zero() {
        sleep(delay).await;
    }
    let applied = store.dispatch(action).await;
    store.end_submit().await;
    applied
}

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Record `message` against `field` when `value` is blank.
pub(crate) fn require_text(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
}

pub(crate) fn require<T>(errors: &mut FieldErrors, field: &'static str, value: &Option<T>, message: &str) {
    if value.is_none() {
        errors.add(field, message);
    }
}
