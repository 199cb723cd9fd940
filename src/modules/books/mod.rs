pub mod messages;
pub mod models;
pub mod query;
pub mod registry;
pub mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use bookshelf_kernel::{InitCtx, Module};
use serde_json::json;

use crate::utils::{ShortIdGenerator, SystemClock};
use registry::BookRegistry;

/// Books module: the in-memory registry plus its HTTP surface
pub struct BooksModule {
    registry: Arc<BookRegistry>,
}

impl BooksModule {
    pub fn new(registry: Arc<BookRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<BookRegistry> {
        &self.registry
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.registry.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(openapi_fragment())
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let remaining = self.registry.len()?;
        tracing::info!(
            module = self.name(),
            books = remaining,
            "books module stopped, in-memory records discarded"
        );
        Ok(())
    }
}

/// Create the books module with a wall clock and random short ids
pub fn create_module() -> Arc<BooksModule> {
    let registry = BookRegistry::new(Arc::new(ShortIdGenerator), Arc::new(SystemClock));
    Arc::new(BooksModule::new(Arc::new(registry)))
}

fn fail_response(description: &str) -> serde_json::Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/FailResponse" }
            }
        }
    })
}

fn success_response(description: &str, data_schema: serde_json::Value) -> serde_json::Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": {
                    "type": "object",
                    "properties": {
                        "status": { "type": "string", "enum": ["success"] },
                        "message": { "type": "string" },
                        "data": data_schema
                    },
                    "required": ["status"]
                }
            }
        }
    })
}

fn book_id_param() -> serde_json::Value {
    json!({
        "name": "book_id",
        "in": "path",
        "required": true,
        "schema": { "type": "string" }
    })
}

fn openapi_fragment() -> serde_json::Value {
    let payload_body = json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/BookPayload" }
            }
        }
    });

    json!({
        "paths": {
            "/": {
                "get": {
                    "summary": "List books",
                    "tags": ["Books"],
                    "parameters": [
                        { "name": "name", "in": "query", "required": false, "schema": { "type": "string" },
                          "description": "Case-insensitive substring of the name; takes precedence over the flags" },
                        { "name": "reading", "in": "query", "required": false, "schema": { "type": "string" },
                          "description": "1/true or 0/false; takes precedence over finished" },
                        { "name": "finished", "in": "query", "required": false, "schema": { "type": "string" },
                          "description": "1/true or 0/false" }
                    ],
                    "responses": {
                        "200": success_response("Projected books", json!({
                            "type": "object",
                            "properties": {
                                "books": {
                                    "type": "array",
                                    "items": { "$ref": "#/components/schemas/BookSummary" }
                                }
                            }
                        }))
                    }
                },
                "post": {
                    "summary": "Add a book",
                    "tags": ["Books"],
                    "requestBody": payload_body.clone(),
                    "responses": {
                        "201": success_response("Book added", json!({
                            "type": "object",
                            "properties": { "bookId": { "type": "string" } }
                        })),
                        "400": fail_response("Missing name or readPage greater than pageCount")
                    }
                }
            },
            "/{book_id}": {
                "get": {
                    "summary": "Get a book",
                    "tags": ["Books"],
                    "parameters": [book_id_param()],
                    "responses": {
                        "200": success_response("Full book record", json!({
                            "type": "object",
                            "properties": { "book": { "$ref": "#/components/schemas/Book" } }
                        })),
                        "404": fail_response("Book not found")
                    }
                },
                "put": {
                    "summary": "Edit a book",
                    "tags": ["Books"],
                    "parameters": [book_id_param()],
                    "requestBody": payload_body,
                    "responses": {
                        "200": success_response("Book updated", json!({})),
                        "400": fail_response("Missing name or readPage greater than pageCount"),
                        "404": fail_response("Book not found")
                    }
                },
                "delete": {
                    "summary": "Delete a book",
                    "tags": ["Books"],
                    "parameters": [book_id_param()],
                    "responses": {
                        "200": success_response("Book deleted", json!({})),
                        "404": fail_response("Book not found")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Book": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                        "year": { "description": "Stored as sent" },
                        "author": { "description": "Stored as sent" },
                        "summary": { "description": "Stored as sent" },
                        "publisher": { "description": "Stored as sent" },
                        "pageCount": { "description": "Stored as sent; compared numerically when a number" },
                        "readPage": { "description": "Stored as sent; compared numerically when a number" },
                        "finished": { "type": "boolean" },
                        "reading": { "type": "boolean", "nullable": true },
                        "insertedAt": { "type": "string", "format": "date-time" },
                        "updatedAt": { "type": "string", "format": "date-time" }
                    },
                    "required": ["id", "name", "finished", "insertedAt", "updatedAt"]
                },
                "BookSummary": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                        "publisher": { "description": "Stored as sent" }
                    },
                    "required": ["id", "name"]
                },
                "BookPayload": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "year": { "example": 2010 },
                        "author": { "example": "John Doe" },
                        "summary": { "example": "Lorem ipsum dolor sit amet" },
                        "publisher": { "example": "Dicoding Indonesia" },
                        "pageCount": { "type": "number" },
                        "readPage": { "type": "number" },
                        "reading": { "type": "boolean" }
                    },
                    "required": ["name"]
                }
            }
        }
    })
}
