use super::{detached, Engine};

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    api::CatalogAPI,
    catalog,
    error::{invalid_state_error, Error},
    session::Snapshot,
};

#[async_trait]
impl CatalogAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn load_catalog(&self) -> Result<Snapshot, Error> {
        if !self.session().await.catalog.claim_load() {
            tracing::warn!("catalog already requested");
            return Err(invalid_state_error());
        }

        let shared = Arc::clone(&self.session);
        let source = Arc::clone(&self.catalog_source);

        detached(async move {
            let (vehicles, destinations) = catalog::fetch(source.as_ref()).await;

            let mut session = shared.lock().await;
            session.catalog.settle(vehicles, destinations);

            Ok(session.snapshot())
        })
        .await
    }

    async fn snapshot(&self) -> Snapshot {
        self.session().await.snapshot()
    }
}
