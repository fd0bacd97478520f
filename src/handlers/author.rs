//! Author resource: list, detail, create, delete, update.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::models::{Author, AuthorView, BookSummary, BookSummaryView};
use crate::render::{context, render};
use crate::response::redirect;
use crate::state::AppState;
use crate::store::AuthorDelete;
use crate::validation::{validate_author, AuthorForm, FieldError};

const NO_ERRORS: &[FieldError] = &[];

/// All authors, family name ascending.
pub async fn author_list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let authors = state.store.list_authors().await?;
    let views: Vec<AuthorView> = authors.iter().map(AuthorView::from).collect();

    let mut ctx = context("Author List");
    ctx.insert("author_list", &views);
    Ok(Html(render("author_list.html", &ctx)?))
}

/// One author with the books that reference it; both reads run concurrently.
pub async fn author_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id)?;
    let (author, books) = tokio::join!(
        state.store.find_author(&id),
        state.store.books_by_author(&id)
    );
    let author = author?.ok_or_else(|| AppError::NotFound("Author not found".into()))?;
    let books = books?;

    let mut ctx = context("Author Detail");
    ctx.insert("author", &AuthorView::from(&author));
    ctx.insert("author_books", &book_views(&books));
    Ok(Html(render("author_detail.html", &ctx)?))
}

pub async fn author_create_get() -> Result<Html<String>, AppError> {
    let mut ctx = context("Create Author");
    ctx.insert("author", &AuthorForm::default());
    ctx.insert("errors", NO_ERRORS);
    Ok(Html(render("author_form.html", &ctx)?))
}

/// Validate the submission; on failure re-render the form with what was
/// typed plus the full error list, on success persist and redirect to the
/// new author's page. The insert is awaited before the redirect goes out.
pub async fn author_create_post(
    State(state): State<AppState>,
    Form(form): Form<AuthorForm>,
) -> Result<Response, AppError> {
    match validate_author(&form) {
        Err(errors) => {
            let mut ctx = context("Create Author");
            ctx.insert("author", &form);
            ctx.insert("errors", &errors);
            Ok(Html(render("author_form.html", &ctx)?).into_response())
        }
        Ok(input) => {
            let author = Author {
                id: None,
                first_name: input.first_name,
                family_name: input.family_name,
                date_of_birth: input.date_of_birth,
                date_of_death: input.date_of_death,
            };
            let id = state.store.insert_author(&author).await?;
            tracing::info!(author = %id, "author created");
            Ok(redirect(&format!("/catalog/author/{}", id.to_hex())))
        }
    }
}

/// Confirmation page. A vanished author goes back to the list.
pub async fn author_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let (author, books) = tokio::join!(
        state.store.find_author(&id),
        state.store.books_by_author(&id)
    );
    let Some(author) = author? else {
        return Ok(redirect("/catalog/authors"));
    };
    Ok(delete_page(&author, &books?)?.into_response())
}

#[derive(Debug, Deserialize)]
pub struct DeleteAuthorForm {
    #[serde(default)]
    pub authorid: String,
}

/// Guarded delete. The id comes from the form body; the store refuses the
/// delete while books reference the author, in which case the confirmation
/// page is shown again with those books.
pub async fn author_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<DeleteAuthorForm>,
) -> Result<Response, AppError> {
    let page_id = parse_id(&id)?;
    let target = parse_id(&form.authorid)?;

    match state.store.delete_author(&target).await? {
        AuthorDelete::HasBooks(books) => {
            let Some(author) = state.store.find_author(&page_id).await? else {
                return Ok(redirect("/catalog/authors"));
            };
            Ok(delete_page(&author, &books)?.into_response())
        }
        AuthorDelete::Deleted | AuthorDelete::NotFound => Ok(redirect("/catalog/authors")),
    }
}

pub async fn author_update_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let id = parse_id(&id)?;
    let author = state
        .store
        .find_author(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Author not found".into()))?;

    let mut ctx = context("Update Author");
    ctx.insert("author", &AuthorForm::from(&author));
    ctx.insert("errors", NO_ERRORS);
    Ok(Html(render("author_form.html", &ctx)?))
}

// TODO: wire this to the validation pipeline once author editing ships.
pub async fn author_update_post() -> Response {
    (
        StatusCode::NOT_IMPLEMENTED,
        "Author update is not yet supported",
    )
        .into_response()
}

fn delete_page(author: &Author, books: &[BookSummary]) -> Result<Html<String>, AppError> {
    let mut ctx = context("Delete Author");
    ctx.insert("author", &AuthorView::from(author));
    ctx.insert("author_books", &book_views(books));
    Ok(Html(render("author_delete.html", &ctx)?))
}

fn book_views(books: &[BookSummary]) -> Vec<BookSummaryView> {
    books.iter().map(BookSummaryView::from).collect()
}
