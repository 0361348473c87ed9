pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::Book;
use crate::core::library::LibraryResult;

/// Book CRUD as seen by callers such as transport handlers. Implementations
/// delegate to a [`BookRepository`](crate::books::repository::BookRepository)
/// and return its outcome unchanged.
#[async_trait]
pub trait BookService: Sync + Send {
    async fn create_book(&self, book: &Book) -> LibraryResult<Book>;
    async fn get_books(&self) -> LibraryResult<Vec<Book>>;
    async fn get_book_by_id(&self, id: i64) -> LibraryResult<Book>;
    async fn update_book(&self, book: &Book) -> LibraryResult<Book>;
    async fn delete_book(&self, id: i64) -> LibraryResult<()>;
}
