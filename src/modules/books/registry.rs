//! In-memory book store.
//!
//! Records live in insertion order behind a single `RwLock`; every operation
//! holds the lock for its full duration.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use super::models::{Book, BookPayload, BookSummary};
use super::query::Criterion;
use crate::utils::{Clock, IdGenerator};

/// Attempts at drawing an unused id before giving up.
const ID_ATTEMPTS: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("book name is missing")]
    MissingName,

    #[error("readPage exceeds pageCount")]
    ReadPageExceedsPageCount,

    #[error("no book with id '{0}'")]
    NotFound(String),

    #[error("could not draw an unused book id after {0} attempts")]
    IdSpaceExhausted(usize),

    #[error("book registry lock poisoned")]
    LockPoisoned,
}

pub type RegistryResult<T> = Result<T, RegistryError>;

pub struct BookRegistry {
    books: RwLock<Vec<Book>>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl BookRegistry {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            books: RwLock::new(Vec::new()),
            ids,
            clock,
        }
    }

    /// Validate and append a new book, returning its id.
    pub fn create(&self, payload: BookPayload) -> RegistryResult<String> {
        let name = validate(&payload)?.to_string();

        let mut books = self.write()?;
        let id = self.fresh_id(&books)?;
        let now = self.clock.now();

        books.push(Book {
            id: id.clone(),
            name,
            finished: payload.is_finished(),
            year: payload.year,
            author: payload.author,
            summary: payload.summary,
            publisher: payload.publisher,
            page_count: payload.page_count,
            read_page: payload.read_page,
            reading: payload.reading,
            inserted_at: now,
            updated_at: now,
        });

        tracing::debug!(book_id = %id, total = books.len(), "book added");
        Ok(id)
    }

    /// Every book, projected, in insertion order.
    pub fn list_all(&self) -> RegistryResult<Vec<BookSummary>> {
        Ok(self.read()?.iter().map(Book::summary_view).collect())
    }

    /// Books matching `criterion`, projected, in insertion order.
    pub fn list_filtered(&self, criterion: &Criterion) -> RegistryResult<Vec<BookSummary>> {
        Ok(self
            .read()?
            .iter()
            .filter(|book| criterion.matches(book))
            .map(Book::summary_view)
            .collect())
    }

    pub fn get(&self, id: &str) -> RegistryResult<Book> {
        self.read()?
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Replace the editable fields of a book.
    ///
    /// `finished` keeps the value computed when the book was added.
    pub fn update(&self, id: &str, payload: BookPayload) -> RegistryResult<()> {
        let mut books = self.write()?;
        let book = books
            .iter_mut()
            .find(|book| book.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        let name = validate(&payload)?.to_string();

        book.name = name;
        book.year = payload.year;
        book.author = payload.author;
        book.summary = payload.summary;
        book.publisher = payload.publisher;
        book.page_count = payload.page_count;
        book.read_page = payload.read_page;
        book.reading = payload.reading;
        book.updated_at = self.clock.now();

        tracing::debug!(book_id = %id, "book updated");
        Ok(())
    }

    pub fn delete(&self, id: &str) -> RegistryResult<()> {
        let mut books = self.write()?;
        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))?;

        books.remove(index);

        tracing::debug!(book_id = %id, total = books.len(), "book deleted");
        Ok(())
    }

    pub fn len(&self) -> RegistryResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> RegistryResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn fresh_id(&self, books: &[Book]) -> RegistryResult<String> {
        for _ in 0..ID_ATTEMPTS {
            let id = self.ids.next_id();
            if books.iter().all(|book| book.id != id) {
                return Ok(id);
            }
            tracing::warn!(book_id = %id, "generated book id already taken, retrying");
        }
        Err(RegistryError::IdSpaceExhausted(ID_ATTEMPTS))
    }

    fn read(&self) -> RegistryResult<RwLockReadGuard<'_, Vec<Book>>> {
        self.books.read().map_err(|_| RegistryError::LockPoisoned)
    }

    fn write(&self) -> RegistryResult<RwLockWriteGuard<'_, Vec<Book>>> {
        self.books.write().map_err(|_| RegistryError::LockPoisoned)
    }
}

/// Name first, then the page counts.
fn validate(payload: &BookPayload) -> RegistryResult<&str> {
    let name = payload.name().ok_or(RegistryError::MissingName)?;
    if payload.read_page_exceeds_page_count() {
        return Err(RegistryError::ReadPageExceedsPageCount);
    }
    Ok(name)
}
