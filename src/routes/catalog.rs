//! Catalog resource routes, mounted under `/catalog`.
//!
//! Literal segments (`/author/create`) take priority over parameterized
//! ones (`/author/:id`), so the create form is reachable.

use axum::{routing::get, Router};

use crate::handlers::{author, book, pages};
use crate::state::AppState;

pub fn catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::catalog_index))
        .route("/authors", get(author::author_list))
        .route(
            "/author/create",
            get(author::author_create_get).post(author::author_create_post),
        )
        .route(
            "/author/:id/delete",
            get(author::author_delete_get).post(author::author_delete_post),
        )
        .route(
            "/author/:id/update",
            get(author::author_update_get).post(author::author_update_post),
        )
        .route("/author/:id", get(author::author_detail))
        .route("/books", get(book::book_list))
        .route("/book/:id", get(book::book_detail))
        .with_state(state)
}
