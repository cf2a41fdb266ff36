mod booking_api;
mod catalog_api;
mod navigation_api;
mod planner_api;
mod quote_api;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, MutexGuard};

use crate::{
    api::API,
    catalog::DynCatalogSource,
    error::{unexpected_error, Error},
    forms::{booking::CLOSE_TRANSITION, DynSubmitter},
    planner::DynTripPlanner,
    session::Session,
};

/// Owns the session and the capabilities that reach outside the process.
///
/// The session lock is never held across a call into a capability. Long
/// running work is bracketed by a begin step and a completion step that each
/// take the lock briefly, and the completion step runs on its own task so it
/// still happens when the caller goes away.
pub struct Engine {
    session: Arc<Mutex<Session>>,
    catalog_source: DynCatalogSource,
    submitter: DynSubmitter,
    planner: DynTripPlanner,
    close_transition: Duration,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(catalog_source: DynCatalogSource, submitter: DynSubmitter, planner: DynTripPlanner) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::default())),
            catalog_source,
            submitter,
            planner,
            close_transition: CLOSE_TRANSITION,
        }
    }

    pub fn with_close_transition(mut self, close_transition: Duration) -> Self {
        self.close_transition = close_transition;
        self
    }

    async fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().await
    }
}

/// Runs `work` on its own task and waits for it. Dropping the returned future
/// does not cancel `work`.
async fn detached<T, F>(work: F) -> Result<T, Error>
where
    F: Future<Output = Result<T, Error>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(work).await.map_err(|err| {
        tracing::error!("background task failed: {}", err);
        unexpected_error()
    })?
}

impl API for Engine {}
