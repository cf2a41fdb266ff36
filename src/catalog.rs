use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::entities::{Destination, Vehicle};
use crate::error::Error;

#[async_trait]
pub trait CatalogSource {
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, Error>;
    async fn fetch_destinations(&self) -> Result<Vec<Destination>, Error>;
}

pub type DynCatalogSource = Arc<dyn CatalogSource + Send + Sync>;

/// The fleet and destination collections together with their one-shot
/// loading lifecycle.
#[derive(Clone, Debug, Serialize)]
pub struct Catalog {
    pub vehicles: Vec<Vehicle>,
    pub destinations: Vec<Destination>,
    pub is_loading: bool,
    #[serde(skip)]
    requested: bool,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            vehicles: Vec::new(),
            destinations: Vec::new(),
            is_loading: true,
            requested: false,
        }
    }
}

impl Catalog {
    /// Claims the single load allowed per lifetime. Returns `false` if a load
    /// was already started.
    pub fn claim_load(&mut self) -> bool {
        if self.requested {
            return false;
        }

        self.requested = true;
        true
    }

    /// Applies the joined fetch result. Either failure discards both
    /// collections; the loading flag clears in every case.
    pub fn settle(&mut self, vehicles: Result<Vec<Vehicle>, Error>, destinations: Result<Vec<Destination>, Error>) {
        match (vehicles, destinations) {
            (Ok(vehicles), Ok(destinations)) => {
                tracing::info!(
                    vehicles = vehicles.len(),
                    destinations = destinations.len(),
                    "catalog loaded"
                );
                self.vehicles = vehicles;
                self.destinations = destinations;
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::error!("failed to fetch catalog: {}", err);
                self.vehicles.clear();
                self.destinations.clear();
            }
        }

        self.is_loading = false;
    }

    pub fn find_vehicle(&self, id: u64) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn find_destination(&self, id: u64) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }
}

/// Requests both collections concurrently and waits for both to resolve.
#[tracing::instrument(skip_all)]
pub async fn fetch(
    source: &(dyn CatalogSource + Send + Sync),
) -> (Result<Vec<Vehicle>, Error>, Result<Vec<Destination>, Error>) {
    futures::join!(source.fetch_vehicles(), source.fetch_destinations())
}


#[cfg(test)]
mod tests {
    use super::fakes::*;
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn load_keeps_order_and_clears_flag() {
        let source = FixedCatalog {
            vehicles: Some(vec![vehicle(2, "Luxury SUV"), vehicle(1, "Compact Sedan")]),
            destinations: Some(vec![destination(7, "Ella"), destination(3, "Kandy")]),
        };

        let mut catalog = Catalog::default();
        assert!(catalog.is_loading);

        let (vehicles, destinations) = block_on(fetch(&source));
        catalog.settle(vehicles, destinations);

        assert!(!catalog.is_loading);
        let names: Vec<_> = catalog.vehicles.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Luxury SUV", "Compact Sedan"]);
        let ids: Vec<_> = catalog.destinations.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![7, 3]);
    }

    #[test]
    fn partial_failure_discards_both() {
        let source = FixedCatalog {
            vehicles: Some(vec![vehicle(1, "Compact Sedan")]),
            destinations: None,
        };

        let mut catalog = Catalog::default();
        let (vehicles, destinations) = block_on(fetch(&source));
        catalog.settle(vehicles, destinations);

        assert!(!catalog.is_loading);
        assert!(catalog.vehicles.is_empty());
        assert!(catalog.destinations.is_empty());
    }

    #[test]
    fn load_is_claimed_once() {
        let mut catalog = Catalog::default();
        assert!(catalog.claim_load());
        assert!(!catalog.claim_load());
    }
}
