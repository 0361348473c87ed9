use tracing::info;
use crate::books::domain::BookService;
use crate::books::domain::service::BookServiceImpl;
use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;

pub fn create_book_repository(config: &Configuration) -> Box<dyn BookRepository> {
    info!(min_book_name_length = config.min_book_name_length, "creating in-memory book repository");
    Box::new(MemoryBookRepository::new(config))
}

pub fn create_book_service(config: &Configuration) -> Box<dyn BookService> {
    let book_repo = create_book_repository(config);
    Box::new(BookServiceImpl::new(config, book_repo))
}
