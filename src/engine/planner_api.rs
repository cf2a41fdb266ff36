use super::{detached, Engine};

use std::sync::Arc;

use async_trait::async_trait;

use crate::{api::PlannerAPI, error::Error, session::Snapshot};

#[async_trait]
impl PlannerAPI for Engine {
    #[tracing::instrument(skip(self, request))]
    async fn plan_trip(&self, request: String) -> Result<Snapshot, Error> {
        let request = self.session().await.planner.begin(&request)?;

        let shared = Arc::clone(&self.session);
        let planner = Arc::clone(&self.planner);

        detached(async move {
            let result = planner.generate_plan(&request).await;

            let mut session = shared.lock().await;
            session.planner.finish(result);

            Ok(session.snapshot())
        })
        .await
    }
}
