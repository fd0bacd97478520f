//! Site pages outside the catalog resources.

use axum::{
    extract::State,
    response::{Html, Response},
};

use crate::error::AppError;
use crate::render::{context, render};
use crate::response::redirect;
use crate::state::AppState;

/// The site root forwards to the catalog home.
pub async fn site_index() -> Response {
    redirect("/catalog")
}

/// Catalog home with record counts.
pub async fn catalog_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let counts = state.store.counts().await?;

    let mut ctx = context("Local Library Home");
    ctx.insert("counts", &counts);
    Ok(Html(render("index.html", &ctx)?))
}

/// Placeholder user resource.
pub async fn users_index() -> &'static str {
    "respond with a resource"
}
