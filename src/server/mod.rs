mod handlers;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::api::DynAPI;
use crate::error::{unexpected_error, Error};
use crate::server::handlers::{booking, navigation, pages, planner, quotes};

/// Directory the static catalog files are served from.
#[derive(Clone, Debug)]
pub struct DataDir(pub PathBuf);

pub fn router(api: DynAPI, data_dir: PathBuf) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/state", get(pages::state))
        .route("/data/:file", get(pages::data_file))
        .route("/navigate", post(navigation::navigate))
        .route("/destinations/back", post(navigation::back_to_list))
        .route("/destinations/:id/select", post(navigation::select_destination))
        .route("/vehicles/:id/booking", post(booking::open))
        .route("/booking", post(booking::update))
        .route("/booking/submit", post(booking::submit))
        .route("/booking/close", post(booking::close))
        .route("/quote", post(quotes::update))
        .route("/quote/submit", post(quotes::submit))
        .route("/quote/reset", post(quotes::reset))
        .route("/planner", post(planner::plan))
        .layer(Extension(api))
        .layer(Extension(DataDir(data_dir)))
}

pub async fn serve(api: DynAPI, addr: SocketAddr, data_dir: PathBuf) -> Result<(), Error> {
    let app = router(api, data_dir);

    tracing::info!("listening on {}", addr);

    axum::Server::try_bind(&addr)
        .map_err(|err| {
            tracing::error!("failed to bind {}: {}", addr, err);
            unexpected_error()
        })?
        .serve(app.into_make_service())
        .await
        .map_err(|err| {
            tracing::error!("server error: {}", err);
            unexpected_error()
        })
}
