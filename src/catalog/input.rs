use std::fmt;
use std::fmt::{Display, Formatter};
use crate::core::library::{LibraryError, LibraryResult};

pub const INVALID_INPUT: &str = "Invalid input. Please try again.";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuChoice {
    AddBook,
    RemoveBook,
    BorrowBook,
    ReturnBook,
    ShowBooks,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddBook,
        MenuChoice::RemoveBook,
        MenuChoice::BorrowBook,
        MenuChoice::ReturnBook,
        MenuChoice::ShowBooks,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> usize {
        match self {
            MenuChoice::AddBook => 1,
            MenuChoice::RemoveBook => 2,
            MenuChoice::BorrowBook => 3,
            MenuChoice::ReturnBook => 4,
            MenuChoice::ShowBooks => 5,
            MenuChoice::Exit => 6,
        }
    }
}

impl Display for MenuChoice {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MenuChoice::AddBook => write!(f, "Add a new book"),
            MenuChoice::RemoveBook => write!(f, "Remove a book"),
            MenuChoice::BorrowBook => write!(f, "Borrow a book"),
            MenuChoice::ReturnBook => write!(f, "Return a book"),
            MenuChoice::ShowBooks => write!(f, "Show all books"),
            MenuChoice::Exit => write!(f, "Exit"),
        }
    }
}

pub fn validate_choice(raw: &str) -> LibraryResult<MenuChoice> {
    let raw = raw.trim();
    MenuChoice::ALL.iter()
        .find(|c| c.number().to_string() == raw)
        .copied()
        .ok_or_else(|| LibraryError::validation(INVALID_INPUT, Some("choice".to_string())))
}

pub fn validate_text(raw: &str) -> LibraryResult<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LibraryError::validation(INVALID_INPUT, Some("text".to_string())));
    }
    Ok(raw.to_string())
}

// the catalog treats the isbn as an opaque key, the digit rule lives only here
pub fn validate_isbn(raw: &str) -> LibraryResult<String> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(LibraryError::validation(INVALID_INPUT, Some("isbn".to_string())));
    }
    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use crate::catalog::input::{validate_choice, validate_isbn, validate_text, MenuChoice};

    #[test]
    fn test_should_validate_choice() {
        assert_eq!(MenuChoice::AddBook, validate_choice("1").expect("valid choice"));
        assert_eq!(MenuChoice::ShowBooks, validate_choice(" 5 ").expect("valid choice"));
        assert_eq!(MenuChoice::Exit, validate_choice("6").expect("valid choice"));
        for raw in ["", "0", "7", "06", "one", "1 2"] {
            assert!(validate_choice(raw).is_err(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_should_validate_text() {
        assert_eq!("Dune", validate_text("  Dune ").expect("valid text").as_str());
        assert!(validate_text("").is_err());
        assert!(validate_text("   ").is_err());
    }

    #[test]
    fn test_should_validate_isbn() {
        assert_eq!("0441013597", validate_isbn("0441013597\r").expect("valid isbn").as_str());
        for raw in ["", "  ", "978-0441", "12a", "-1", "1.5", "١٢٣"] {
            assert!(validate_isbn(raw).is_err(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_should_number_menu() {
        let numbers: Vec<usize> = MenuChoice::ALL.iter().map(|c| c.number()).collect();
        assert_eq!(vec![1, 2, 3, 4, 5, 6], numbers);
        assert_eq!("Show all books", MenuChoice::ShowBooks.to_string());
    }
}
