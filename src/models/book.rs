use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::{Author, AuthorView};

/// A catalog book. `author` references the owning [`Author`]; deletion of an
/// author is refused while any book still points at it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub summary: String,
    pub author: ObjectId,
}

impl Book {
    pub fn url(&self) -> String {
        match self.id {
            Some(id) => format!("/catalog/book/{}", id.to_hex()),
            None => String::new(),
        }
    }
}

/// Projection of a book to title and summary, as listed on author pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSummary {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub summary: String,
}

impl BookSummary {
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id.to_hex())
    }
}

/// A book joined with its author, as returned by the store for book pages.
#[derive(Debug, Clone)]
pub struct BookWithAuthor {
    pub book: Book,
    pub author: Option<Author>,
}

#[derive(Debug, Serialize)]
pub struct BookSummaryView {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub url: String,
}

impl From<&BookSummary> for BookSummaryView {
    fn from(book: &BookSummary) -> Self {
        Self {
            id: book.id.to_hex(),
            title: book.title.clone(),
            summary: book.summary.clone(),
            url: book.url(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookView {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub url: String,
    pub author: Option<AuthorView>,
}

impl From<&BookWithAuthor> for BookView {
    fn from(entry: &BookWithAuthor) -> Self {
        Self {
            id: entry.book.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: entry.book.title.clone(),
            summary: entry.book.summary.clone(),
            url: entry.book.url(),
            author: entry.author.as_ref().map(AuthorView::from),
        }
    }
}
