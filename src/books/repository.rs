pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {
    fn find_by_isbn(&self, isbn: &str) -> Option<&BookEntity> {
        self.get(isbn)
    }
}
