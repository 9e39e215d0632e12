use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity abstracts a single catalog record keyed by its isbn. Only the borrowed
// flag (with its version and updated_at) changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub borrowed: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            borrowed: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn set_borrowed(&mut self, borrowed: bool) {
        self.borrowed = borrowed;
        self.version += 1;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn is_borrowed(&self) -> bool {
        self.borrowed
    }
}
