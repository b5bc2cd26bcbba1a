//! Library book domain models and DTOs.

use chrono::NaiveDate;
use secretaria_core::{ListFilter, contains_ci};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::BookId;

/// A library book, as returned by the `/livros/` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    pub author: String,
    pub isbn: String,
    #[serde(rename = "data_publicacao", default)]
    pub publication_date: Option<NaiveDate>,
    /// Copies currently on the shelf. The backend owns this count; the
    /// client never decrements its local copy optimistically.
    #[serde(rename = "exemplares_disponiveis")]
    pub available_copies: u32,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }
}

/// DTO for cataloguing a book.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateBookDto {
    #[serde(rename = "titulo")]
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(rename = "autor")]
    #[validate(length(min = 1, max = 150))]
    pub author: String,
    #[validate(length(min = 10, max = 17))]
    pub isbn: String,
    #[serde(rename = "data_publicacao", skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<NaiveDate>,
    #[serde(rename = "exemplares_disponiveis")]
    pub available_copies: u32,
}

/// Client-side filter criteria for the book list.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    /// Keep only books with at least one copy on the shelf.
    pub available_only: bool,
}

impl ListFilter<Book> for BookFilter {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && !self.available_only
    }

    fn matches(&self, record: &Book) -> bool {
        self.title
            .as_deref()
            .is_none_or(|needle| contains_ci(&record.title, needle))
            && self
                .author
                .as_deref()
                .is_none_or(|needle| contains_ci(&record.author, needle))
            && (!self.available_only || record.is_available())
    }
}
