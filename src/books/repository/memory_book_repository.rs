use tracing::debug;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository holds the catalog records in insertion order. There is no index,
// every lookup is a scan for the first exact isbn match.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Vec<BookEntity>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|b| b.isbn == id)
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn create(&mut self, entity: BookEntity) -> LibraryResult<usize> {
        if self.position(entity.isbn.as_str()).is_some() {
            return Err(LibraryError::already_exists(entity.isbn.as_str()));
        }
        debug!("appending book {} at {}", entity.id(), self.books.len());
        self.books.push(entity);
        Ok(1)
    }

    fn get(&self, id: &str) -> Option<&BookEntity> {
        self.books.iter().find(|b| b.isbn == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut BookEntity> {
        self.books.iter_mut().find(|b| b.isbn == id)
    }

    fn delete(&mut self, id: &str) -> LibraryResult<BookEntity> {
        match self.position(id) {
            Some(ndx) => Ok(self.books.remove(ndx)),
            None => Err(LibraryError::not_found(id)),
        }
    }

    fn all(&self) -> Vec<&BookEntity> {
        self.books.iter().collect()
    }

    fn len(&self) -> usize {
        self.books.len()
    }
}

impl BookRepository for MemoryBookRepository {}
