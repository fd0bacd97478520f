//! Book resource: read-only list and detail pages.

use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::models::BookView;
use crate::render::{context, render};
use crate::state::AppState;

/// All books, title ascending, with their authors.
pub async fn book_list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let books = state.store.list_books().await?;
    let views: Vec<BookView> = books.iter().map(BookView::from).collect();

    let mut ctx = context("Book List");
    ctx.insert("book_list", &views);
    Ok(Html(render("book_list.html", &ctx)?))
}

pub async fn book_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id)?;
    let book = state
        .store
        .find_book(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".into()))?;

    let mut ctx = context("Book Detail");
    ctx.insert("book", &BookView::from(&book));
    Ok(Html(render("book_detail.html", &ctx)?))
}
