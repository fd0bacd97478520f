//! Catalog persistence behind a trait so the HTTP layer never talks to a
//! driver directly. [`MongoStore`] is the production backend; [`MemoryStore`]
//! backs the test suite.

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::error::StoreError;
use crate::models::{Author, BookSummary, BookWithAuthor};

/// Outcome of a guarded author deletion.
#[derive(Debug)]
pub enum AuthorDelete {
    Deleted,
    NotFound,
    /// Refused: these books still reference the author.
    HasBooks(Vec<BookSummary>),
}

/// Record totals shown on the catalog home page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogCounts {
    pub authors: u64,
    pub books: u64,
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All authors, family name ascending.
    async fn list_authors(&self) -> Result<Vec<Author>, StoreError>;

    async fn find_author(&self, id: &ObjectId) -> Result<Option<Author>, StoreError>;

    /// Persist a new author and return its assigned id. The write has
    /// completed by the time this returns.
    async fn insert_author(&self, author: &Author) -> Result<ObjectId, StoreError>;

    /// Delete an author unless books still reference it. The dependent-book
    /// check and the delete execute as one storage-level operation so the
    /// guard holds under concurrent writes.
    async fn delete_author(&self, id: &ObjectId) -> Result<AuthorDelete, StoreError>;

    /// Books referencing the author, projected to title and summary.
    async fn books_by_author(&self, author: &ObjectId) -> Result<Vec<BookSummary>, StoreError>;

    /// All books with their authors, title ascending.
    async fn list_books(&self) -> Result<Vec<BookWithAuthor>, StoreError>;

    async fn find_book(&self, id: &ObjectId) -> Result<Option<BookWithAuthor>, StoreError>;

    async fn counts(&self) -> Result<CatalogCounts, StoreError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}
