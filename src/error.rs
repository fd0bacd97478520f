//! Typed errors and the terminal HTTP error handler.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("malformed document: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("render: {0}")]
    Render(#[from] tera::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Every unhandled failure funnels through here and becomes the rendered
/// error page. The debug representation is only exposed in development.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut ctx = crate::render::context("Error");
        ctx.insert("status", &status.as_u16());
        ctx.insert("message", &self.to_string());
        let detail = match crate::settings::environment() {
            crate::settings::Environment::Development => format!("{self:?}"),
            crate::settings::Environment::Production => String::new(),
        };
        ctx.insert("detail", &detail);
        match crate::render::render("error.html", &ctx) {
            Ok(body) => (status, Html(body)).into_response(),
            Err(err) => {
                tracing::error!(%err, "error page render failed");
                (status, self.to_string()).into_response()
            }
        }
    }
}
