use axum::extract::{Extension, Form};
use axum::response::Redirect;
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, PlannerAPI};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct PlanParams {
    request: String,
}

pub async fn plan(Extension(api): Extension<DynAPI>, Form(params): Form<PlanParams>) -> Result<Redirect, Error> {
    api.plan_trip(params.request).await?;

    Ok(Redirect::to("/"))
}
