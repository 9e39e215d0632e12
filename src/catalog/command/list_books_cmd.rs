use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::Command;
use crate::core::library::LibraryResult;

pub struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct ListBooksCommandRequest {}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    // insertion order
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> LibraryResult<ListBooksCommandResponse> {
        self.catalog_service.list_books().map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let svc = factory::create_catalog_service(&Configuration::new("test"));
        let add_cmd = AddBookCommand::new(svc.clone());
        let list_cmd = ListBooksCommand::new(svc);

        let empty = list_cmd.execute(ListBooksCommandRequest::default()).await.expect("should list books");
        assert!(empty.books.is_empty());

        let _ = add_cmd.execute(AddBookCommandRequest::new("2", "B", "Y")).await.expect("should add book");
        let _ = add_cmd.execute(AddBookCommandRequest::new("1", "A", "X")).await.expect("should add book");
        let res = list_cmd.execute(ListBooksCommandRequest::default()).await.expect("should list books");
        let titles: Vec<&str> = res.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["B", "A"], titles);
    }
}
