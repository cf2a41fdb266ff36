use serde::Serialize;

use crate::catalog::Catalog;
use crate::entities::{Destination, Vehicle};
use crate::forms::{BookingModal, QuoteForm};
use crate::navigation::{Navigator, ScrollTarget, View};
use crate::planner::PlannerPanel;

/// State owned by the root of the site for the lifetime of the process.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub catalog: Catalog,
    pub navigator: Navigator,
    pub booking: BookingModal,
    pub quote: QuoteForm,
    pub planner: PlannerPanel,
}

#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    pub view: View,
    pub is_loading: bool,
    pub vehicles: Vec<Vehicle>,
    pub destinations: Vec<Destination>,
    pub booking: BookingModal,
    pub quote: QuoteForm,
    pub planner: PlannerPanel,
    pub pending_scroll: Option<ScrollTarget>,
}

impl Session {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            view: self.navigator.view(),
            is_loading: self.catalog.is_loading,
            vehicles: self.catalog.vehicles.clone(),
            destinations: self.catalog.destinations.clone(),
            booking: self.booking.clone(),
            quote: self.quote.clone(),
            planner: self.planner.clone(),
            pending_scroll: self.navigator.pending_scroll().cloned(),
        }
    }
}
