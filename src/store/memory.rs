//! In-memory catalog store. Backs the test suite; every operation matches
//! the Mongo store's observable behavior, including the delete guard, which
//! runs check and delete under a single lock acquisition.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::{Mutex, PoisonError};

use crate::error::StoreError;
use crate::models::{Author, Book, BookSummary, BookWithAuthor};
use crate::store::{AuthorDelete, CatalogCounts, CatalogStore};

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    authors: Vec<Author>,
    books: Vec<Book>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Seed an author directly, returning its assigned id.
    pub fn add_author(&self, mut author: Author) -> ObjectId {
        let id = author.id.unwrap_or_else(ObjectId::new);
        author.id = Some(id);
        self.lock().authors.push(author);
        id
    }

    /// Seed a book referencing `author`, returning its assigned id.
    pub fn add_book(&self, title: &str, summary: &str, author: ObjectId) -> ObjectId {
        let id = ObjectId::new();
        self.lock().books.push(Book {
            id: Some(id),
            title: title.into(),
            summary: summary.into(),
            author,
        });
        id
    }
}

fn summaries_for(inner: &Inner, author: &ObjectId) -> Vec<BookSummary> {
    inner
        .books
        .iter()
        .filter(|b| b.author == *author)
        .filter_map(|b| {
            b.id.map(|id| BookSummary {
                id,
                title: b.title.clone(),
                summary: b.summary.clone(),
            })
        })
        .collect()
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_authors(&self) -> Result<Vec<Author>, StoreError> {
        let mut authors = self.lock().authors.clone();
        authors.sort_by(|a, b| a.family_name.cmp(&b.family_name));
        Ok(authors)
    }

    async fn find_author(&self, id: &ObjectId) -> Result<Option<Author>, StoreError> {
        Ok(self.lock().authors.iter().find(|a| a.id == Some(*id)).cloned())
    }

    async fn insert_author(&self, author: &Author) -> Result<ObjectId, StoreError> {
        Ok(self.add_author(author.clone()))
    }

    async fn delete_author(&self, id: &ObjectId) -> Result<AuthorDelete, StoreError> {
        let mut inner = self.lock();
        let books = summaries_for(&inner, id);
        if !books.is_empty() {
            return Ok(AuthorDelete::HasBooks(books));
        }
        let before = inner.authors.len();
        inner.authors.retain(|a| a.id != Some(*id));
        Ok(if inner.authors.len() == before {
            AuthorDelete::NotFound
        } else {
            AuthorDelete::Deleted
        })
    }

    async fn books_by_author(&self, author: &ObjectId) -> Result<Vec<BookSummary>, StoreError> {
        Ok(summaries_for(&self.lock(), author))
    }

    async fn list_books(&self) -> Result<Vec<BookWithAuthor>, StoreError> {
        let inner = self.lock();
        let mut books = inner.books.clone();
        books.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(books
            .into_iter()
            .map(|book| {
                let author = inner.authors.iter().find(|a| a.id == Some(book.author)).cloned();
                BookWithAuthor { book, author }
            })
            .collect())
    }

    async fn find_book(&self, id: &ObjectId) -> Result<Option<BookWithAuthor>, StoreError> {
        let inner = self.lock();
        let Some(book) = inner.books.iter().find(|b| b.id == Some(*id)).cloned() else {
            return Ok(None);
        };
        let author = inner.authors.iter().find(|a| a.id == Some(book.author)).cloned();
        Ok(Some(BookWithAuthor { book, author }))
    }

    async fn counts(&self) -> Result<CatalogCounts, StoreError> {
        let inner = self.lock();
        Ok(CatalogCounts {
            authors: inner.authors.len() as u64,
            books: inner.books.len() as u64,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(first: &str, family: &str) -> Author {
        Author {
            id: None,
            first_name: first.into(),
            family_name: family.into(),
            date_of_birth: None,
            date_of_death: None,
        }
    }

    #[tokio::test]
    async fn authors_list_sorted_by_family_name() {
        let store = MemoryStore::new();
        store.add_author(author("John", "Tolkien"));
        store.add_author(author("Jane", "Austen"));

        let listed = store.list_authors().await.unwrap();
        let families: Vec<_> = listed.iter().map(|a| a.family_name.as_str()).collect();
        assert_eq!(families, ["Austen", "Tolkien"]);
    }

    #[tokio::test]
    async fn delete_refused_while_books_reference_the_author() {
        let store = MemoryStore::new();
        let id = store.add_author(author("Jane", "Austen"));
        store.add_book("Emma", "A novel of manners.", id);

        match store.delete_author(&id).await.unwrap() {
            AuthorDelete::HasBooks(books) => assert_eq!(books[0].title, "Emma"),
            other => panic!("expected HasBooks, got {other:?}"),
        }
        assert!(store.find_author(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn delete_removes_an_unreferenced_author() {
        let store = MemoryStore::new();
        let id = store.add_author(author("Jane", "Austen"));

        assert!(matches!(
            store.delete_author(&id).await.unwrap(),
            AuthorDelete::Deleted
        ));
        assert!(store.find_author(&id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_of_unknown_id_reports_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.delete_author(&ObjectId::new()).await.unwrap(),
            AuthorDelete::NotFound
        ));
    }

    #[tokio::test]
    async fn counts_reflect_seeded_records() {
        let store = MemoryStore::new();
        let id = store.add_author(author("Jane", "Austen"));
        store.add_book("Emma", "A novel of manners.", id);
        store.add_book("Persuasion", "Her last novel.", id);

        let counts = store.counts().await.unwrap();
        assert_eq!((counts.authors, counts.books), (1, 2));
    }
}
