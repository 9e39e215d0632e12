use std::fmt;
use std::fmt::{Display, Formatter};
use std::sync::PoisonError;
use serde::{Deserialize, Serialize};

pub const END_OF_INPUT: &str = "EndOfInput";

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    AlreadyExists {
        isbn: String,
    },
    NotFound {
        isbn: String,
    },
    AlreadyBorrowed {
        isbn: String,
        title: String,
    },
    NotBorrowed {
        isbn: String,
        title: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn already_exists(isbn: &str) -> LibraryError {
        LibraryError::AlreadyExists { isbn: isbn.to_string() }
    }

    pub fn not_found(isbn: &str) -> LibraryError {
        LibraryError::NotFound { isbn: isbn.to_string() }
    }

    pub fn already_borrowed(isbn: &str, title: &str) -> LibraryError {
        LibraryError::AlreadyBorrowed { isbn: isbn.to_string(), title: title.to_string() }
    }

    pub fn not_borrowed(isbn: &str, title: &str) -> LibraryError {
        LibraryError::NotBorrowed { isbn: isbn.to_string(), title: title.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn end_of_input() -> LibraryError {
        LibraryError::runtime("input stream closed", Some(END_OF_INPUT.to_string()))
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self, LibraryError::Runtime { reason_code: Some(code), .. } if code == END_OF_INPUT)
    }

    // Domain outcomes the console reports and moves on from; everything else is ambient.
    pub fn is_domain(&self) -> bool {
        match self {
            LibraryError::AlreadyExists { .. } => { true }
            LibraryError::NotFound { .. } => { true }
            LibraryError::AlreadyBorrowed { .. } => { true }
            LibraryError::NotBorrowed { .. } => { true }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json encoding {:?}", err).as_str())
    }
}

impl<T> From<PoisonError<T>> for LibraryError {
    fn from(err: PoisonError<T>) -> Self {
        LibraryError::runtime(
            format!("catalog lock poisoned {}", err).as_str(), None)
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::AlreadyExists { isbn } => {
                write!(f, "Error: A book with ISBN {} already exists in the library.", isbn)
            }
            LibraryError::NotFound { isbn } => {
                write!(f, "No book with ISBN {} found.", isbn)
            }
            LibraryError::AlreadyBorrowed { title, .. } => {
                write!(f, "Sorry, '{}' is already borrowed.", title)
            }
            LibraryError::NotBorrowed { title, .. } => {
                write!(f, "'{}' was not borrowed.", title)
            }
            LibraryError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl BookStatus {
    pub fn from_borrowed(borrowed: bool) -> Self {
        if borrowed { BookStatus::Borrowed } else { BookStatus::Available }
    }
}

impl From<String> for BookStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Borrowed" => BookStatus::Borrowed,
            _ => BookStatus::Available,
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}
