//! Scripted [`BookRepository`] double for service tests.
//!
//! Each operation answers from a queue of results registered up front, one
//! result per call. A call with nothing scripted fails with a runtime error so
//! an unexpected repository hit shows up as a test failure. Enable the
//! `test-utils` feature to use it from other crates.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use crate::books::domain::model::Book;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};

#[derive(Debug, Clone, PartialEq)]
pub enum BookRepositoryCall {
    CreateBook(Book),
    GetBooks,
    GetBookById(i64),
    UpdateBook(Book),
    DeleteBook(i64),
}

#[derive(Default)]
struct Expectations {
    create_book: VecDeque<LibraryResult<Book>>,
    get_books: VecDeque<LibraryResult<Vec<Book>>>,
    get_book_by_id: VecDeque<LibraryResult<Book>>,
    update_book: VecDeque<LibraryResult<Book>>,
    delete_book: VecDeque<LibraryResult<()>>,
}

impl Expectations {
    fn pending(&self) -> usize {
        self.create_book.len() + self.get_books.len() + self.get_book_by_id.len()
            + self.update_book.len() + self.delete_book.len()
    }
}

#[derive(Default)]
pub struct MockBookRepository {
    expectations: Mutex<Expectations>,
    calls: Mutex<Vec<BookRepositoryCall>>,
}

impl MockBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_create_book(&self, result: LibraryResult<Book>) -> &Self {
        self.expectations().create_book.push_back(result);
        self
    }

    pub fn expect_get_books(&self, result: LibraryResult<Vec<Book>>) -> &Self {
        self.expectations().get_books.push_back(result);
        self
    }

    pub fn expect_get_book_by_id(&self, result: LibraryResult<Book>) -> &Self {
        self.expectations().get_book_by_id.push_back(result);
        self
    }

    pub fn expect_update_book(&self, result: LibraryResult<Book>) -> &Self {
        self.expectations().update_book.push_back(result);
        self
    }

    pub fn expect_delete_book(&self, result: LibraryResult<()>) -> &Self {
        self.expectations().delete_book.push_back(result);
        self
    }

    /// Inputs received so far, in call order.
    pub fn calls(&self) -> Vec<BookRepositoryCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Scripted results not consumed yet.
    pub fn pending(&self) -> usize {
        self.expectations().pending()
    }

    fn expectations(&self) -> MutexGuard<'_, Expectations> {
        self.expectations.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn answer<T>(&self, call: BookRepositoryCall, op: &str,
                 next: impl FnOnce(&mut Expectations) -> Option<LibraryResult<T>>) -> LibraryResult<T> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(call);
        let mut expectations = self.expectations();
        next(&mut *expectations).unwrap_or_else(|| {
            Err(LibraryError::runtime(format!("unexpected call to {}", op).as_str(), None))
        })
    }
}

#[async_trait]
impl BookRepository for MockBookRepository {
    async fn create_book(&self, book: &Book) -> LibraryResult<Book> {
        self.answer(BookRepositoryCall::CreateBook(book.clone()), "create_book",
                    |e| e.create_book.pop_front())
    }

    async fn get_books(&self) -> LibraryResult<Vec<Book>> {
        self.answer(BookRepositoryCall::GetBooks, "get_books",
                    |e| e.get_books.pop_front())
    }

    async fn get_book_by_id(&self, id: i64) -> LibraryResult<Book> {
        self.answer(BookRepositoryCall::GetBookById(id), "get_book_by_id",
                    |e| e.get_book_by_id.pop_front())
    }

    async fn update_book(&self, book: &Book) -> LibraryResult<Book> {
        self.answer(BookRepositoryCall::UpdateBook(book.clone()), "update_book",
                    |e| e.update_book.pop_front())
    }

    async fn delete_book(&self, id: i64) -> LibraryResult<()> {
        self.answer(BookRepositoryCall::DeleteBook(id), "delete_book",
                    |e| e.delete_book.pop_front())
    }
}
