pub mod action;
pub mod seed;
pub mod views;

pub use action::*;

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

/// Handle to the one mutable [`Snapshot`] of the running service.
///
/// Cheap to clone; every clone refers to the same state. Transitions are
/// serialized through the write lock, so `reduce` never runs concurrently
/// with itself.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<Snapshot>>,
    /// Submissions currently in their round trip. The loading flag is raised
    /// by the first and lowered by the last.
    in_flight: Arc<Mutex<usize>>,
}

impl Store {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(snapshot)),
            in_flight: Arc::new(Mutex::new(0)),
        }
    }

    /// A store holding the sample dataset.
    pub fn seeded() -> Self {
        Self::new(seed::initial_snapshot())
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> Snapshot {
        self.inner.read().await.clone()
    }

    /// Run a read-only query against the current state without copying it.
    pub async fn read<R>(&self, query: impl FnOnce(&Snapshot) -> R) -> R {
        let guard = self.inner.read().await;
        query(&*guard)
    }

    /// Apply a transition. Never fails: transitions that match nothing leave
    /// the state as it was, are logged, and return `false`.
    pub async fn dispatch(&self, action: Action) -> bool {
        let mut guard = self.inner.write().await;

        let applied = !action.is_noop_on(&guard);
        if !applied {
            warn!(
                action = action.name(),
                target = action.target_id().unwrap_or_default(),
                "Transition matched nothing, state unchanged"
            );
        } else {
            debug!(
                action = action.name(),
                target = action.target_id().unwrap_or_default(),
                "Applying transition"
            );
        }

        let current = std::mem::take(&mut *guard);
        *guard = reduce(current, action);
        applied
    }

    /// Register a submission; raises the loading flag if none was running.
    pub async fn begin_submit(&self) {
        let mut in_flight = self.in_flight.lock().await;
        *in_flight += 1;
        if *in_flight == 1 {
            self.dispatch(Action::SetLoading(true)).await;
        }
    }

    /// Finish a submission; lowers the loading flag once none are left.
    pub async fn end_submit(&self) {
        let mut in_flight = self.in_flight.lock().await;
        *in_flight = in_flight.saturating_sub(1);
        if *in_flight == 0 {
            self.dispatch(Action::SetLoading(false)).await;
        }
    }
}
