use super::Engine;

use async_trait::async_trait;

use crate::{
    api::NavigationAPI,
    error::{not_found_error, Error},
    navigation::{Page, ScrollTarget},
    session::Snapshot,
};

#[async_trait]
impl NavigationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn navigate(&self, page: Page, section: Option<String>) -> Snapshot {
        let mut session = self.session().await;
        session.navigator.navigate(page, section.as_deref());

        session.snapshot()
    }

    #[tracing::instrument(skip(self))]
    async fn select_destination(&self, destination_id: u64) -> Result<Snapshot, Error> {
        let mut session = self.session().await;

        let destination = session
            .catalog
            .find_destination(destination_id)
            .cloned()
            .ok_or_else(not_found_error)?;

        session.navigator.select_destination(destination)?;

        Ok(session.snapshot())
    }

    #[tracing::instrument(skip(self))]
    async fn back_to_list(&self) -> Result<Snapshot, Error> {
        let mut session = self.session().await;
        session.navigator.back_to_list()?;

        Ok(session.snapshot())
    }

    async fn take_scroll_target(&self) -> Option<ScrollTarget> {
        self.session().await.navigator.take_scroll_target()
    }
}
