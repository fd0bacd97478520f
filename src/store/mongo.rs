//! MongoDB-backed catalog store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection, Database};
use std::collections::HashMap;

use crate::error::StoreError;
use crate::models::{Author, Book, BookSummary, BookWithAuthor};
use crate::store::{AuthorDelete, CatalogCounts, CatalogStore};

const AUTHORS: &str = "authors";
const BOOKS: &str = "books";

pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    /// Build a store from a connection string. The driver connects lazily;
    /// use [`CatalogStore::ping`] to probe reachability.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        Ok(Self { client, db })
    }

    fn authors(&self) -> Collection<Author> {
        self.db.collection(AUTHORS)
    }

    fn books(&self) -> Collection<Book> {
        self.db.collection(BOOKS)
    }

    fn book_summaries(&self) -> Collection<BookSummary> {
        self.db.collection(BOOKS)
    }
}

#[async_trait]
impl CatalogStore for MongoStore {
    async fn list_authors(&self) -> Result<Vec<Author>, StoreError> {
        let cursor = self
            .authors()
            .find(doc! {})
            .sort(doc! { "family_name": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_author(&self, id: &ObjectId) -> Result<Option<Author>, StoreError> {
        Ok(self.authors().find_one(doc! { "_id": *id }).await?)
    }

    async fn insert_author(&self, author: &Author) -> Result<ObjectId, StoreError> {
        let result = self.authors().insert_one(author).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Malformed("inserted author id is not an ObjectId".into()))
    }

    async fn delete_author(&self, id: &ObjectId) -> Result<AuthorDelete, StoreError> {
        // Check and delete inside one transaction so a book created between
        // the two cannot orphan its author reference.
        let mut session = self.client.start_session().await?;
        session.start_transaction().await?;

        let mut cursor = self
            .book_summaries()
            .find(doc! { "author": *id })
            .projection(doc! { "title": 1, "summary": 1 })
            .session(&mut session)
            .await?;
        let books: Vec<BookSummary> = cursor.stream(&mut session).try_collect().await?;
        if !books.is_empty() {
            session.abort_transaction().await?;
            return Ok(AuthorDelete::HasBooks(books));
        }

        let result = self
            .authors()
            .delete_one(doc! { "_id": *id })
            .session(&mut session)
            .await?;
        session.commit_transaction().await?;

        Ok(if result.deleted_count == 0 {
            AuthorDelete::NotFound
        } else {
            tracing::debug!(author = %id, "author deleted");
            AuthorDelete::Deleted
        })
    }

    async fn books_by_author(&self, author: &ObjectId) -> Result<Vec<BookSummary>, StoreError> {
        let cursor = self
            .book_summaries()
            .find(doc! { "author": *author })
            .projection(doc! { "title": 1, "summary": 1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn list_books(&self) -> Result<Vec<BookWithAuthor>, StoreError> {
        let cursor = self.books().find(doc! {}).sort(doc! { "title": 1 }).await?;
        let books: Vec<Book> = cursor.try_collect().await?;

        let ids: Vec<ObjectId> = books.iter().map(|b| b.author).collect();
        let authors: Vec<Author> = if ids.is_empty() {
            Vec::new()
        } else {
            self.authors()
                .find(doc! { "_id": { "$in": ids } })
                .await?
                .try_collect()
                .await?
        };
        let by_id: HashMap<ObjectId, Author> = authors
            .into_iter()
            .filter_map(|a| a.id.map(|id| (id, a)))
            .collect();

        Ok(books
            .into_iter()
            .map(|book| {
                let author = by_id.get(&book.author).cloned();
                BookWithAuthor { book, author }
            })
            .collect())
    }

    async fn find_book(&self, id: &ObjectId) -> Result<Option<BookWithAuthor>, StoreError> {
        let Some(book) = self.books().find_one(doc! { "_id": *id }).await? else {
            return Ok(None);
        };
        let author = self.authors().find_one(doc! { "_id": book.author }).await?;
        Ok(Some(BookWithAuthor { book, author }))
    }

    async fn counts(&self) -> Result<CatalogCounts, StoreError> {
        let authors = self.authors().count_documents(doc! {}).await?;
        let books = self.books().count_documents(doc! {}).await?;
        Ok(CatalogCounts { authors, books })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
