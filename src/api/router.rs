use axum::{
    Router,
    routing::{get, patch, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, checkout_book, create_book, get_book_by_id, list_books, return_book};

/// Creates the API router with all catalog endpoints
///
/// Query endpoints:
/// - GET /books - List all books in insertion order
/// - GET /book/:id - Get a single book
///
/// Command endpoints:
/// - POST /book - Add a book
/// - PATCH /checkout?id= - Check out one copy
/// - PATCH /return?id= - Return one copy
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Query endpoints
        .route("/books", get(list_books))
        .route("/book/:id", get(get_book_by_id))
        // Command endpoints
        .route("/book", post(create_book))
        .route("/checkout", patch(checkout_book))
        .route("/return", patch(return_book))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
