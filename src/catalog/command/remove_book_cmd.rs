use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub isbn: String,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: String) -> Self {
        Self {
            isbn,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub book: BookDto,
}

impl RemoveBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> LibraryResult<RemoveBookCommandResponse> {
        self.catalog_service.remove_book(req.isbn.as_str())
            .map(RemoveBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test"));
        let add_cmd = AddBookCommand::new(svc.clone());
        let remove_cmd = RemoveBookCommand::new(svc.clone());

        let _ = add_cmd.execute(AddBookCommandRequest::new("111", "Dune", "Herbert"))
            .await.expect("should add book");
        let res = remove_cmd.execute(RemoveBookCommandRequest::new("111".to_string()))
            .await.expect("should remove book");
        assert_eq!("Dune", res.book.title.as_str());
        assert!(svc.list_books().expect("should list books").is_empty());
    }

    #[tokio::test]
    async fn test_should_not_remove_from_empty_catalog() {
        let svc = factory::create_catalog_service(&Configuration::new("test"));
        let remove_cmd = RemoveBookCommand::new(svc.clone());

        let res = remove_cmd.execute(RemoveBookCommandRequest::new("999".to_string())).await;
        assert_eq!(Some(LibraryError::not_found("999")), res.err());
        assert!(svc.list_books().expect("should list books").is_empty());
    }
}
