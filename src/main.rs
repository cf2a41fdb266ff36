use std::sync::Arc;

use coco_tours::api::{CatalogAPI, DynAPI};
use coco_tours::catalog::DynCatalogSource;
use coco_tours::config::{Config, DataSource};
use coco_tours::engine::Engine;
use coco_tours::external::gemini::GeminiPlanner;
use coco_tours::external::static_data::{DirCatalogSource, HttpCatalogSource};
use coco_tours::forms::SimulatedSubmitter;
use coco_tours::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    let catalog_source: DynCatalogSource = match &config.data_source {
        DataSource::Http(url) => Arc::new(HttpCatalogSource::new(url.clone())),
        DataSource::Dir(dir) => Arc::new(DirCatalogSource::new(dir.clone())),
    };

    let engine = Engine::new(
        catalog_source,
        Arc::new(SimulatedSubmitter::new(config.submit_delay)),
        Arc::new(GeminiPlanner::new(config.api_base.clone(), config.api_key.clone())),
    )
    .with_close_transition(config.close_transition);

    let api = Arc::new(engine) as DynAPI;

    let loader = Arc::clone(&api);
    tokio::spawn(async move {
        if let Ok(snapshot) = loader.load_catalog().await {
            tracing::info!(vehicles = snapshot.vehicles.len(), "site ready");
        }
    });

    if let Err(err) = serve(api, config.bind_addr, config.data_dir).await {
        tracing::error!("server stopped: {}", err);
        std::process::exit(1);
    }
}
