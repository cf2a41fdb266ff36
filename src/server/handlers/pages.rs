use axum::extract::{Extension, Json, Path};
use axum::http::header;
use axum::response::{Html, IntoResponse};

use crate::api::{CatalogAPI, DynAPI, NavigationAPI};
use crate::error::{not_found_error, Error};
use crate::external::static_data::{DESTINATIONS_FILE, VEHICLES_FILE};
use crate::server::DataDir;
use crate::session::Snapshot;
use crate::views;

pub async fn index(Extension(api): Extension<DynAPI>) -> Html<String> {
    let scroll = api.take_scroll_target().await;
    let snapshot = api.snapshot().await;

    Html(views::render_page(&snapshot, scroll))
}

pub async fn state(Extension(api): Extension<DynAPI>) -> Json<Snapshot> {
    api.snapshot().await.into()
}

pub async fn data_file(
    Extension(DataDir(dir)): Extension<DataDir>,
    Path(file): Path<String>,
) -> Result<impl IntoResponse, Error> {
    if file != VEHICLES_FILE && file != DESTINATIONS_FILE {
        return Err(not_found_error());
    }

    let body = tokio::fs::read(dir.join(&file)).await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body))
}
