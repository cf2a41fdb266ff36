use super::{detached, Engine};

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    api::BookingAPI,
    error::{not_found_error, Error},
    forms::{Fields, FormKind},
    session::Snapshot,
};

#[async_trait]
impl BookingAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn open_booking(&self, vehicle_id: u64) -> Result<Snapshot, Error> {
        let mut session = self.session().await;

        let vehicle = session
            .catalog
            .find_vehicle(vehicle_id)
            .map(|v| v.name.clone())
            .ok_or_else(not_found_error)?;

        session.booking.open(&vehicle);

        Ok(session.snapshot())
    }

    #[tracing::instrument(skip(self, values))]
    async fn update_booking(&self, values: Fields) -> Result<Snapshot, Error> {
        let mut session = self.session().await;
        session.booking.set_fields(values)?;

        Ok(session.snapshot())
    }

    #[tracing::instrument(skip(self))]
    async fn submit_booking(&self) -> Result<Snapshot, Error> {
        let (fields, generation) = self.session().await.booking.begin_submit()?;

        let shared = Arc::clone(&self.session);
        let submitter = Arc::clone(&self.submitter);

        detached(async move {
            let outcome = submitter.submit(FormKind::Booking, fields).await;

            let mut session = shared.lock().await;
            session
                .booking
                .complete_submit(generation, outcome)
                .map(|_| session.snapshot())
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn close_booking(&self) -> Snapshot {
        let mut session = self.session().await;
        let ticket = session.booking.close();

        let shared = Arc::clone(&self.session);
        let delay = self.close_transition;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if shared.lock().await.booking.finish_close(ticket) {
                tracing::debug!("booking modal reset");
            }
        });

        session.snapshot()
    }
}
