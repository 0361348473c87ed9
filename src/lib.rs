//! Book management service layer.
//!
//! [`books::domain::BookService`] forwards every create/read/update/delete
//! call to an injected [`books::repository::BookRepository`] and hands back
//! whatever the repository decided.

pub mod books;
pub mod core;
pub mod utils;
