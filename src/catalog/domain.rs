pub mod service;

use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// CatalogService is the ordered, isbn-keyed book collection. Every operation is total:
// rejected requests come back as LibraryError values and leave the collection untouched.
pub trait CatalogService: Sync + Send {
    fn add_book(&self, isbn: &str, title: &str, author: &str) -> LibraryResult<BookDto>;
    fn remove_book(&self, isbn: &str) -> LibraryResult<BookDto>;
    fn borrow_book(&self, isbn: &str) -> LibraryResult<BookDto>;
    fn return_book(&self, isbn: &str) -> LibraryResult<BookDto>;
    fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>>;
}
