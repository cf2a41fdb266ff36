use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Error;
use crate::forms::Fields;
use crate::navigation::{Page, ScrollTarget};
use crate::session::Snapshot;

#[async_trait]
pub trait CatalogAPI {
    async fn load_catalog(&self) -> Result<Snapshot, Error>;
    async fn snapshot(&self) -> Snapshot;
}

#[async_trait]
pub trait NavigationAPI {
    async fn navigate(&self, page: Page, section: Option<String>) -> Snapshot;
    async fn select_destination(&self, destination_id: u64) -> Result<Snapshot, Error>;
    async fn back_to_list(&self) -> Result<Snapshot, Error>;
    async fn take_scroll_target(&self) -> Option<ScrollTarget>;
}

#[async_trait]
pub trait BookingAPI {
    async fn open_booking(&self, vehicle_id: u64) -> Result<Snapshot, Error>;
    async fn update_booking(&self, values: Fields) -> Result<Snapshot, Error>;
    async fn submit_booking(&self) -> Result<Snapshot, Error>;
    async fn close_booking(&self) -> Snapshot;
}

#[async_trait]
pub trait QuoteAPI {
    async fn update_quote(&self, values: Fields) -> Result<Snapshot, Error>;
    async fn submit_quote(&self) -> Result<Snapshot, Error>;
    async fn reset_quote(&self) -> Snapshot;
}

#[async_trait]
pub trait PlannerAPI {
    async fn plan_trip(&self, request: String) -> Result<Snapshot, Error>;
}

pub trait API: CatalogAPI + NavigationAPI + BookingAPI + QuoteAPI + PlannerAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
