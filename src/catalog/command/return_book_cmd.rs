use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub struct ReturnBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ReturnBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub book: BookDto,
}

impl ReturnBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> LibraryResult<ReturnBookCommandResponse> {
        self.catalog_service.return_book(req.isbn.as_str())
            .map(ReturnBookCommandResponse::new)
    }
}
