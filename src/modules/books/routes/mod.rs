//! HTTP handlers for the Books module.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use bookshelf_http::{AppError, Envelope, Reply};

use super::messages::{self, Operation};
use super::models::{BookDetail, BookList, BookPayload, CreatedBook};
use super::query::BookQuery;
use super::registry::{BookRegistry, RegistryError};

type BooksState = Arc<BookRegistry>;

/// Routes relative to the module mount path.
pub fn router(registry: BooksState) -> Router {
    Router::new()
        .route("/", get(list_books).post(add_book))
        .route(
            "/{book_id}",
            get(get_book).put(edit_book).delete(delete_book),
        )
        .with_state(registry)
}

async fn add_book(
    State(registry): State<BooksState>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<Reply<CreatedBook>, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let book_id = registry
        .create(payload)
        .map_err(|err| failure(Operation::Add, err))?;

    tracing::info!(book_id = %book_id, "book added");
    Ok(Reply::created(
        Envelope::success(CreatedBook { book_id }).with_message(messages::ADDED),
    ))
}

async fn list_books(
    State(registry): State<BooksState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Reply<BookList>, AppError> {
    let Query(pairs) = query.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    let query: BookQuery = pairs.into_iter().collect();

    let books = match query.criterion() {
        Some(criterion) => {
            tracing::debug!(?criterion, "listing filtered books");
            registry.list_filtered(&criterion)
        }
        None => registry.list_all(),
    }
    .map_err(|err| AppError::Internal(err.into()))?;

    Ok(Reply::ok(Envelope::success(BookList { books })))
}

async fn get_book(
    State(registry): State<BooksState>,
    Path(book_id): Path<String>,
) -> Result<Reply<BookDetail>, AppError> {
    let book = registry
        .get(&book_id)
        .map_err(|err| failure(Operation::Get, err))?;

    Ok(Reply::ok(Envelope::success(BookDetail { book })))
}

async fn edit_book(
    State(registry): State<BooksState>,
    Path(book_id): Path<String>,
    payload: Result<Json<BookPayload>, JsonRejection>,
) -> Result<Reply<()>, AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    registry
        .update(&book_id, payload)
        .map_err(|err| failure(Operation::Update, err))?;

    tracing::info!(book_id = %book_id, "book updated");
    Ok(Reply::ok(Envelope::acknowledged(messages::UPDATED)))
}

async fn delete_book(
    State(registry): State<BooksState>,
    Path(book_id): Path<String>,
) -> Result<Reply<()>, AppError> {
    registry
        .delete(&book_id)
        .map_err(|err| failure(Operation::Delete, err))?;

    tracing::info!(book_id = %book_id, "book deleted");
    Ok(Reply::ok(Envelope::acknowledged(messages::DELETED)))
}

fn failure(operation: Operation, err: RegistryError) -> AppError {
    match operation.failure(&err) {
        Some(message) if matches!(err, RegistryError::NotFound(_)) => AppError::not_found(message),
        Some(message) => AppError::validation(message),
        None => AppError::Internal(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn registry_errors_map_to_status_codes() {
        let cases = [
            (Operation::Add, RegistryError::MissingName, StatusCode::BAD_REQUEST),
            (
                Operation::Update,
                RegistryError::ReadPageExceedsPageCount,
                StatusCode::BAD_REQUEST,
            ),
            (
                Operation::Delete,
                RegistryError::NotFound("x".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                Operation::Add,
                RegistryError::LockPoisoned,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (operation, err, expected) in cases {
            assert_eq!(failure(operation, err).status(), expected);
        }
    }
}
