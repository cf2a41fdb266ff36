use super::{detached, Engine};

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    api::QuoteAPI,
    error::Error,
    forms::{Fields, FormKind},
    session::Snapshot,
};

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument(skip(self, values))]
    async fn update_quote(&self, values: Fields) -> Result<Snapshot, Error> {
        let mut session = self.session().await;
        session.quote.set_fields(values)?;

        Ok(session.snapshot())
    }

    #[tracing::instrument(skip(self))]
    async fn submit_quote(&self) -> Result<Snapshot, Error> {
        let fields = self.session().await.quote.begin_submit()?;

        let shared = Arc::clone(&self.session);
        let submitter = Arc::clone(&self.submitter);

        detached(async move {
            let outcome = submitter.submit(FormKind::Quote, fields).await;

            let mut session = shared.lock().await;
            session
                .quote
                .complete_submit(outcome)
                .map(|_| session.snapshot())
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn reset_quote(&self) -> Snapshot {
        let mut session = self.session().await;
        session.quote.reset();

        session.snapshot()
    }
}
