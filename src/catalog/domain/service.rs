use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    // one lock per catalog operation
    book_repository: Mutex<Box<dyn BookRepository>>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository: Mutex::new(book_repository),
            events_publisher,
        }
    }

    fn books(&self) -> LibraryResult<MutexGuard<'_, Box<dyn BookRepository>>> {
        Ok(self.book_repository.lock()?)
    }

    // events are an audit trail, a failed publish never undoes the catalog change
    fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!("failed to publish catalog event {}", err);
        }
    }

    fn set_borrowed(&self, isbn: &str, borrowed: bool) -> LibraryResult<BookDto> {
        let mut books = self.books()?;
        let book = books.get_mut(isbn).ok_or_else(|| LibraryError::not_found(isbn))?;
        if book.is_borrowed() == borrowed {
            return if borrowed {
                Err(LibraryError::already_borrowed(isbn, book.title()))
            } else {
                Err(LibraryError::not_borrowed(isbn, book.title()))
            };
        }
        book.set_borrowed(borrowed);
        debug!("book {} is now {}", isbn, book.status());
        Ok(BookDto::from(&*book))
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&self, isbn: &str, title: &str, author: &str) -> LibraryResult<BookDto> {
        let book = {
            let mut books = self.books()?;
            if books.find_by_isbn(isbn).is_some() {
                info!("rejected duplicate isbn {}", isbn);
                return Err(LibraryError::already_exists(isbn));
            }
            let entity = BookEntity::new(isbn, title, author);
            let book = BookDto::from(&entity);
            books.create(entity)?;
            book
        };
        self.publish(DomainEvent::added(self.branch_id.as_str(), isbn, &book));
        Ok(book)
    }

    fn remove_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        let book = {
            let mut books = self.books()?;
            if books.find_by_isbn(isbn).is_none() {
                info!("nothing to remove for isbn {}", isbn);
                return Err(LibraryError::not_found(isbn));
            }
            BookDto::from(&books.delete(isbn)?)
        };
        self.publish(DomainEvent::removed(self.branch_id.as_str(), isbn, &book));
        Ok(book)
    }

    fn borrow_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        let book = self.set_borrowed(isbn, true).map_err(|err| {
            info!("borrow of {} rejected: {}", isbn, err);
            err
        })?;
        self.publish(DomainEvent::borrowed(self.branch_id.as_str(), isbn, &book));
        Ok(book)
    }

    fn return_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        let book = self.set_borrowed(isbn, false).map_err(|err| {
            info!("return of {} rejected: {}", isbn, err);
            err
        })?;
        self.publish(DomainEvent::returned(self.branch_id.as_str(), isbn, &book));
        Ok(book)
    }

    fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.books()?;
        Ok(books.all().into_iter().map(BookDto::from).collect())
    }

    fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        let books = self.books()?;
        Ok(books.find_by_isbn(isbn).map(BookDto::from))
    }
}
