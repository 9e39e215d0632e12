use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookDto is a read-only snapshot of a catalog record handed out by the Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn is_borrowed(&self) -> bool {
        self.book_status == BookStatus::Borrowed
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            book_status: other.status(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} (ISBN: {}) — {}", self.title, self.author, self.isbn, self.book_status)
    }
}
