use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

/// A stored book record.
///
/// Apart from `name` and `reading`, client fields are kept as the JSON the client sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque identifier assigned at creation
    pub id: String,
    pub name: String,
    pub year: Value,
    pub author: Value,
    pub summary: Value,
    pub publisher: Value,
    pub page_count: Value,
    pub read_page: Value,
    /// Derived from `page_count == read_page` when the book is added; edits leave it alone
    pub finished: bool,
    pub reading: Option<bool>,
    #[serde(with = "time::serde::rfc3339")]
    pub inserted_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Book {
    pub fn summary_view(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

/// Projection used in list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Value,
}

/// Request body for adding or editing a book. Absent fields are `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookPayload {
    pub name: Option<String>,
    pub year: Value,
    pub author: Value,
    pub summary: Value,
    pub publisher: Value,
    pub page_count: Value,
    pub read_page: Value,
    pub reading: Option<bool>,
}

impl BookPayload {
    /// The name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Only compared when both counts are JSON numbers.
    pub fn read_page_exceeds_page_count(&self) -> bool {
        matches!(
            (self.read_page.as_f64(), self.page_count.as_f64()),
            (Some(read), Some(total)) if read > total
        )
    }

    /// Numbers compare by value (`100 == 100.0`); anything else must match exactly.
    pub fn is_finished(&self) -> bool {
        match (self.page_count.as_f64(), self.read_page.as_f64()) {
            (Some(total), Some(read)) => total == read,
            _ => self.page_count == self.read_page,
        }
    }
}

/// `data` of a successful add.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBook {
    pub book_id: String,
}

/// `data` of a list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

/// `data` of a detail response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDetail {
    pub book: Book,
}
