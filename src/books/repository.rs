pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::Book;
use crate::core::library::LibraryResult;

// BookRepository owns persistence and validation of books; failures it
// returns are the ones callers of the service see.
#[async_trait]
pub trait BookRepository: Sync + Send {
    // create a book, the returned book carries the assigned id
    async fn create_book(&self, book: &Book) -> LibraryResult<Book>;

    // all books, possibly empty
    async fn get_books(&self) -> LibraryResult<Vec<Book>>;

    // get a book
    async fn get_book_by_id(&self, id: i64) -> LibraryResult<Book>;

    // updates an existing book
    async fn update_book(&self, book: &Book) -> LibraryResult<Book>;

    // delete a book
    async fn delete_book(&self, id: i64) -> LibraryResult<()>;
}
