use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{
    catalog::CatalogSource,
    entities::{Destination, Vehicle},
    error::{upstream_error, Error},
};

pub const VEHICLES_FILE: &str = "vehicles.json";
pub const DESTINATIONS_FILE: &str = "destinations.json";

/// Fetches the catalog files with plain GETs from `{base_url}/<file>`.
#[derive(Debug)]
pub struct HttpCatalogSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn get<T: DeserializeOwned>(&self, file: &str) -> Result<T, Error> {
        let url = format!("{}/{}", self.base_url, file);

        let res = self.client.get(url).send().await?;

        if !res.status().is_success() {
            tracing::warn!(status = res.status().as_u16(), "catalog request failed");
            return Err(upstream_error());
        }

        Ok(res.json().await?)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        self.get(VEHICLES_FILE).await
    }

    async fn fetch_destinations(&self) -> Result<Vec<Destination>, Error> {
        self.get(DESTINATIONS_FILE).await
    }
}

/// Reads the catalog files from a local directory.
#[derive(Debug)]
pub struct DirCatalogSource {
    dir: PathBuf,
}

impl DirCatalogSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[tracing::instrument(skip(self))]
    async fn read<T: DeserializeOwned>(&self, file: &str) -> Result<T, Error> {
        let bytes = tokio::fs::read(self.dir.join(file)).await?;

        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl CatalogSource for DirCatalogSource {
    async fn fetch_vehicles(&self) -> Result<Vec<Vehicle>, Error> {
        self.read(VEHICLES_FILE).await
    }

    async fn fetch_destinations(&self) -> Result<Vec<Destination>, Error> {
        self.read(DESTINATIONS_FILE).await
    }
}
