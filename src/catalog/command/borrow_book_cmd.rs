use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub struct BorrowBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl BorrowBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    pub isbn: String,
}

impl BorrowBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub book: BookDto,
}

impl BorrowBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> LibraryResult<BorrowBookCommandResponse> {
        self.catalog_service.borrow_book(req.isbn.as_str())
            .map(BorrowBookCommandResponse::new)
    }
}
