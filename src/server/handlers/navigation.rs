use axum::extract::{Extension, Form, Path};
use axum::response::Redirect;
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, NavigationAPI};
use crate::error::Error;
use crate::navigation::Page;
use crate::views;

#[derive(Serialize, Deserialize)]
pub struct NavigateParams {
    page: Page,
    section: Option<String>,
}

pub async fn navigate(
    Extension(api): Extension<DynAPI>,
    Form(params): Form<NavigateParams>,
) -> Redirect {
    let snapshot = api.navigate(params.page, params.section).await;

    Redirect::to(&views::landing_location(&snapshot.view, snapshot.pending_scroll))
}

pub async fn select_destination(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<u64>,
) -> Result<Redirect, Error> {
    api.select_destination(id).await?;

    Ok(Redirect::to("/"))
}

pub async fn back_to_list(Extension(api): Extension<DynAPI>) -> Result<Redirect, Error> {
    api.back_to_list().await?;

    Ok(Redirect::to("/"))
}
