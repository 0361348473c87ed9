use async_trait::async_trait;
use crate::books::domain::BookService;
use crate::books::domain::model::Book;
use crate::books::repository::BookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;

pub struct BookServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl BookServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

#[async_trait]
impl BookService for BookServiceImpl {
    async fn create_book(&self, book: &Book) -> LibraryResult<Book> {
        self.book_repository.create_book(book).await
    }

    async fn get_books(&self) -> LibraryResult<Vec<Book>> {
        self.book_repository.get_books().await
    }

    async fn get_book_by_id(&self, id: i64) -> LibraryResult<Book> {
        self.book_repository.get_book_by_id(id).await
    }

    async fn update_book(&self, book: &Book) -> LibraryResult<Book> {
        self.book_repository.update_book(book).await
    }

    async fn delete_book(&self, id: i64) -> LibraryResult<()> {
        self.book_repository.delete_book(id).await
    }
}
