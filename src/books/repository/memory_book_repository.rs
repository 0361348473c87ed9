use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::books::domain::model::Book;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult, INVALID_BOOK_NAME_LENGTH, RECORD_NOT_FOUND};

#[derive(Debug)]
pub struct MemoryBookRepository {
    books: RwLock<BTreeMap<i64, Book>>,
    next_id: AtomicI64,
    min_name_length: usize,
}

impl MemoryBookRepository {
    pub fn new(config: &Configuration) -> Self {
        Self {
            books: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            min_name_length: config.min_book_name_length,
        }
    }

    fn validate(&self, book: &Book) -> LibraryResult<()> {
        if book.name_book.chars().count() < self.min_name_length {
            return Err(LibraryError::validation(INVALID_BOOK_NAME_LENGTH, Some("name_book".to_string())));
        }
        Ok(())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn create_book(&self, book: &Book) -> LibraryResult<Book> {
        self.validate(book)?;
        let created = book.with_id(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.books.write().await.insert(created.id, created.clone());
        debug!(book_id = created.id, "created book");
        Ok(created)
    }

    async fn get_books(&self) -> LibraryResult<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn get_book_by_id(&self, id: i64) -> LibraryResult<Book> {
        self.books.read().await.get(&id).cloned()
            .ok_or_else(|| LibraryError::not_found(RECORD_NOT_FOUND))
    }

    async fn update_book(&self, book: &Book) -> LibraryResult<Book> {
        self.validate(book)?;
        let mut books = self.books.write().await;
        let existing = books.get_mut(&book.id)
            .ok_or_else(|| LibraryError::not_found(RECORD_NOT_FOUND))?;
        *existing = book.clone();
        debug!(book_id = book.id, "updated book");
        Ok(book.clone())
    }

    async fn delete_book(&self, id: i64) -> LibraryResult<()> {
        self.books.write().await.remove(&id)
            .map(|_| debug!(book_id = id, "deleted book"))
            .ok_or_else(|| LibraryError::not_found(RECORD_NOT_FOUND))
    }
}
