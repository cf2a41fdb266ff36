use axum::extract::{Extension, Form, Path};
use axum::response::Redirect;

use crate::api::{BookingAPI, DynAPI};
use crate::error::Error;
use crate::forms::Fields;

pub async fn open(Extension(api): Extension<DynAPI>, Path(vehicle_id): Path<u64>) -> Result<Redirect, Error> {
    api.open_booking(vehicle_id).await?;

    Ok(Redirect::to("/"))
}

pub async fn update(Extension(api): Extension<DynAPI>, Form(values): Form<Fields>) -> Result<Redirect, Error> {
    api.update_booking(values).await?;

    Ok(Redirect::to("/"))
}

/// Applies the posted fields, then submits.
pub async fn submit(Extension(api): Extension<DynAPI>, Form(values): Form<Fields>) -> Result<Redirect, Error> {
    if !values.is_empty() {
        api.update_booking(values).await?;
    }

    api.submit_booking().await?;

    Ok(Redirect::to("/"))
}

pub async fn close(Extension(api): Extension<DynAPI>) -> Redirect {
    api.close_booking().await;

    Redirect::to("/")
}
