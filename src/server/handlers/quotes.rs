use axum::extract::{Extension, Form};
use axum::response::Redirect;

use crate::api::{DynAPI, QuoteAPI};
use crate::error::Error;
use crate::forms::Fields;

pub async fn update(Extension(api): Extension<DynAPI>, Form(values): Form<Fields>) -> Result<Redirect, Error> {
    api.update_quote(values).await?;

    Ok(Redirect::to("/"))
}

pub async fn submit(Extension(api): Extension<DynAPI>, Form(values): Form<Fields>) -> Result<Redirect, Error> {
    if !values.is_empty() {
        api.update_quote(values).await?;
    }

    api.submit_quote().await?;

    Ok(Redirect::to("/"))
}

pub async fn reset(Extension(api): Extension<DynAPI>) -> Redirect {
    api.reset_quote().await;

    Redirect::to("/")
}
