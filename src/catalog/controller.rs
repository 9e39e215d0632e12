use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};
use crate::books::domain::Book;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::input::{validate_choice, validate_isbn, validate_text, MenuChoice, INVALID_INPUT};
use crate::core::command::Command;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};

pub const MENU: &str = "
--- Library Management ---
1. Add a new book
2. Remove a book
3. Borrow a book
4. Return a book
5. Show all books
6. Exit

";
pub const CHOICE_PROMPT: &str = "Choose an option (1-6): ";
pub const TITLE_PROMPT: &str = "Title: ";
pub const AUTHOR_PROMPT: &str = "Author: ";
pub const ISBN_PROMPT: &str = "ISBN (digits only): ";
pub const REMOVE_PROMPT: &str = "ISBN of the book to remove: ";
pub const BORROW_PROMPT: &str = "ISBN of the book to borrow: ";
pub const RETURN_PROMPT: &str = "ISBN of the book to return: ";
pub const TOO_MANY_ATTEMPTS: &str = "Too many invalid attempts.";
pub const EMPTY_LIBRARY: &str = "The library is currently empty.";
pub const FAREWELL: &str = "Goodbye! Have a great day.";

// CatalogConsole drives one catalog through the text menu until Exit or end of input.
// Every menu choice maps to exactly one catalog command.
pub struct CatalogConsole<R, W> {
    max_input_attempts: Option<usize>,
    add_cmd: AddBookCommand,
    remove_cmd: RemoveBookCommand,
    borrow_cmd: BorrowBookCommand,
    return_cmd: ReturnBookCommand,
    list_cmd: ListBooksCommand,
    reader: R,
    writer: W,
}

impl<R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin> CatalogConsole<R, W> {
    pub fn new(config: &Configuration, catalog_service: Arc<dyn CatalogService>, reader: R, writer: W) -> Self {
        Self {
            max_input_attempts: config.max_input_attempts,
            add_cmd: AddBookCommand::new(catalog_service.clone()),
            remove_cmd: RemoveBookCommand::new(catalog_service.clone()),
            borrow_cmd: BorrowBookCommand::new(catalog_service.clone()),
            return_cmd: ReturnBookCommand::new(catalog_service.clone()),
            list_cmd: ListBooksCommand::new(catalog_service),
            reader,
            writer,
        }
    }

    pub async fn run(&mut self) -> LibraryResult<()> {
        loop {
            self.write(MENU).await?;
            let res = match self.prompt(CHOICE_PROMPT, validate_choice).await {
                Ok(MenuChoice::Exit) => {
                    self.write_line(FAREWELL).await?;
                    return Ok(());
                }
                Ok(choice) => {
                    debug!("menu choice {}", choice);
                    self.dispatch(choice).await
                }
                Err(err) => Err(err),
            };
            match res {
                Ok(()) => {}
                Err(err) if err.is_end_of_input() => {
                    info!("input closed, leaving catalog console");
                    return Ok(());
                }
                Err(err @ LibraryError::Validation { .. }) => {
                    self.write_line(err.to_string().as_str()).await?;
                }
                Err(err) if err.is_domain() => {
                    self.write_line(err.to_string().as_str()).await?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> LibraryResult<()> {
        match choice {
            MenuChoice::AddBook => self.add_book().await,
            MenuChoice::RemoveBook => self.remove_book().await,
            MenuChoice::BorrowBook => self.borrow_book().await,
            MenuChoice::ReturnBook => self.return_book().await,
            MenuChoice::ShowBooks => self.show_books().await,
            MenuChoice::Exit => Ok(()),
        }
    }

    async fn add_book(&mut self) -> LibraryResult<()> {
        let title = self.prompt(TITLE_PROMPT, validate_text).await?;
        let author = self.prompt(AUTHOR_PROMPT, validate_text).await?;
        let isbn = self.prompt(ISBN_PROMPT, validate_isbn).await?;
        let res = self.add_cmd.execute(AddBookCommandRequest::new(
            isbn.as_str(), title.as_str(), author.as_str())).await?;
        self.write_line(format!("Book added: {}", res.book).as_str()).await
    }

    async fn remove_book(&mut self) -> LibraryResult<()> {
        let isbn = self.prompt(REMOVE_PROMPT, validate_isbn).await?;
        let res = self.remove_cmd.execute(RemoveBookCommandRequest::new(isbn)).await?;
        self.write_line(format!("Removed book: {}", res.book).as_str()).await
    }

    async fn borrow_book(&mut self) -> LibraryResult<()> {
        let isbn = self.prompt(BORROW_PROMPT, validate_isbn).await?;
        let res = self.borrow_cmd.execute(BorrowBookCommandRequest::new(isbn)).await?;
        self.write_line(format!("You have successfully borrowed '{}'. Enjoy reading!", res.book.title()).as_str()).await
    }

    async fn return_book(&mut self) -> LibraryResult<()> {
        let isbn = self.prompt(RETURN_PROMPT, validate_isbn).await?;
        let res = self.return_cmd.execute(ReturnBookCommandRequest::new(isbn)).await?;
        self.write_line(format!("Thank you for returning '{}'.", res.book.title()).as_str()).await
    }

    async fn show_books(&mut self) -> LibraryResult<()> {
        let res = self.list_cmd.execute(ListBooksCommandRequest::default()).await?;
        if res.books.is_empty() {
            return self.write_line(EMPTY_LIBRARY).await;
        }
        let mut out = String::from("Library collection:\n");
        for (ndx, book) in res.books.iter().enumerate() {
            out.push_str(format!("{}. {}\n", ndx + 1, book).as_str());
        }
        self.write(out.as_str()).await
    }

    // re-prompts on invalid input; unbounded unless max_input_attempts is configured
    async fn prompt<T, F>(&mut self, prompt: &str, validate: F) -> LibraryResult<T>
        where F: Fn(&str) -> LibraryResult<T> {
        let mut attempts = 0;
        loop {
            self.write(prompt).await?;
            let line = self.read_line().await?;
            match validate(line.as_str()) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempts += 1;
                    debug!("rejected input for {:?}: {:?}", prompt.trim(), err);
                    self.write_line(INVALID_INPUT).await?;
                    if let Some(max) = self.max_input_attempts {
                        if attempts >= max {
                            return Err(LibraryError::validation(TOO_MANY_ATTEMPTS, Some("attempts".to_string())));
                        }
                    }
                }
            }
        }
    }

    async fn read_line(&mut self) -> LibraryResult<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(LibraryError::end_of_input());
        }
        Ok(line)
    }

    async fn write(&mut self, text: &str) -> LibraryResult<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    async fn write_line(&mut self, text: &str) -> LibraryResult<()> {
        self.write(format!("{}\n", text).as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::controller::{CatalogConsole, AUTHOR_PROMPT, BORROW_PROMPT, CHOICE_PROMPT, EMPTY_LIBRARY,
                                     FAREWELL, ISBN_PROMPT, MENU, REMOVE_PROMPT, TITLE_PROMPT, TOO_MANY_ATTEMPTS};
    use crate::catalog::factory;
    use crate::catalog::input::INVALID_INPUT;
    use crate::core::domain::Configuration;

    async fn run_session(config: &Configuration, input: &str) -> String {
        let svc = factory::create_catalog_service(config);
        let mut output: Vec<u8> = Vec::new();
        let mut console = CatalogConsole::new(config, svc, input.as_bytes(), &mut output);
        console.run().await.expect("session should finish");
        drop(console);
        String::from_utf8(output).expect("utf8 output")
    }

    #[tokio::test]
    async fn test_should_show_empty_library_and_exit() {
        let out = run_session(&Configuration::new("test"), "5\n6\n").await;
        let expected = format!("{m}{c}{e}\n{m}{c}{f}\n", m = MENU, c = CHOICE_PROMPT, e = EMPTY_LIBRARY, f = FAREWELL);
        assert_eq!(expected, out);
    }

    #[tokio::test]
    async fn test_should_add_and_list_books() {
        let out = run_session(&Configuration::new("test"),
                              "1\nDune\nHerbert\n111\n1\nEmma\nAusten\n222\n5\n6\n").await;
        assert!(out.contains(format!("{}{}{}", TITLE_PROMPT, AUTHOR_PROMPT, ISBN_PROMPT).as_str()));
        assert!(out.contains("Book added: Dune by Herbert (ISBN: 111) — Available\n"));
        assert!(out.contains("Library collection:\n1. Dune by Herbert (ISBN: 111) — Available\n2. Emma by Austen (ISBN: 222) — Available\n"));
        assert!(out.ends_with(format!("{}\n", FAREWELL).as_str()));
    }

    #[tokio::test]
    async fn test_should_report_duplicate_isbn() {
        let out = run_session(&Configuration::new("test"),
                              "1\nDune\nHerbert\n111\n1\nDune\nHerbertX\n111\n5\n6\n").await;
        assert!(out.contains("Error: A book with ISBN 111 already exists in the library.\n"));
        assert!(out.contains("Library collection:\n1. Dune by Herbert (ISBN: 111) — Available\n"));
        assert!(!out.contains("HerbertX (ISBN"));
    }

    #[tokio::test]
    async fn test_should_run_borrow_return_cycle() {
        let out = run_session(&Configuration::new("test"),
                              "1\nA\nX\n1\n3\n1\n3\n1\n4\n1\n4\n1\n6\n").await;
        let borrowed = out.find("You have successfully borrowed 'A'. Enjoy reading!\n").expect("borrowed");
        let again = out.find("Sorry, 'A' is already borrowed.\n").expect("already borrowed");
        let returned = out.find("Thank you for returning 'A'.\n").expect("returned");
        let not_borrowed = out.find("'A' was not borrowed.\n").expect("not borrowed");
        assert!(borrowed < again && again < returned && returned < not_borrowed);
    }

    #[tokio::test]
    async fn test_should_report_missing_book() {
        let out = run_session(&Configuration::new("test"), "2\n999\n5\n6\n").await;
        assert!(out.contains(format!("{}No book with ISBN 999 found.\n", REMOVE_PROMPT).as_str()));
        assert!(out.contains(EMPTY_LIBRARY));
    }

    #[tokio::test]
    async fn test_should_reprompt_on_invalid_input() {
        let out = run_session(&Configuration::new("test"),
                              "9\n\n3\n12a\n\n42\n6\n").await;
        let expected_choice = format!("{c}{i}\n{c}{i}\n{c}", c = CHOICE_PROMPT, i = INVALID_INPUT);
        assert!(out.contains(expected_choice.as_str()));
        let expected_isbn = format!("{b}{i}\n{b}{i}\n{b}No book with ISBN 42 found.\n", b = BORROW_PROMPT, i = INVALID_INPUT);
        assert!(out.contains(expected_isbn.as_str()));
    }

    #[tokio::test]
    async fn test_should_give_up_after_max_attempts() {
        let mut config = Configuration::new("test");
        config.max_input_attempts = Some(2);
        let out = run_session(&config, "1\n\n\n5\n6\n").await;
        assert!(out.contains(format!("{t}{i}\n{t}{i}\n{m}\n", t = TITLE_PROMPT, i = INVALID_INPUT, m = TOO_MANY_ATTEMPTS).as_str()));
        assert!(out.contains(EMPTY_LIBRARY));
        assert!(out.ends_with(format!("{}\n", FAREWELL).as_str()));
    }

    #[tokio::test]
    async fn test_should_stop_on_end_of_input() {
        let out = run_session(&Configuration::new("test"), "1\nDune\n").await;
        assert!(out.ends_with(AUTHOR_PROMPT));
        assert!(!out.contains(FAREWELL));
    }

    #[tokio::test]
    async fn test_should_accept_last_line_without_newline() {
        let out = run_session(&Configuration::new("test"), "5\n6").await;
        assert!(out.ends_with(format!("{}\n", FAREWELL).as_str()));
    }
}
