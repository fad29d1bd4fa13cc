//! Catalog HTTP Routes
//!
//! Endpoints for listing, adding, and searching books. Field validation
//! lives here, not in the store: a request missing title, author, or
//! year is rejected with a localized message before the store is
//! touched. Store-level load failures degrade to an empty catalog;
//! save failures are reported and never claimed as success.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{Book, CatalogStore};
use crate::i18n::{TranslationLoader, Translations};
use crate::observability::{Logger, Severity};
use crate::search;

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers
pub struct CatalogState {
    pub store: Arc<CatalogStore>,
    pub translations: Arc<TranslationLoader>,
    pub default_language: String,
}

impl CatalogState {
    pub fn new(
        store: Arc<CatalogStore>,
        translations: Arc<TranslationLoader>,
        default_language: impl Into<String>,
    ) -> Self {
        Self {
            store,
            translations,
            default_language: default_language.into(),
        }
    }

    /// Resolves the per-request language: the request's `lang` query
    /// parameter when present, the configured default otherwise.
    fn resolve_translations(&self, requested: Option<&str>) -> Translations {
        let lang = requested.unwrap_or(&self.default_language);
        self.translations.load(lang)
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct LangQuery {
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub lang: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddBookRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct BookListResponse {
    pub books: Vec<Book>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub books: Vec<Book>,
    pub total: usize,
    pub keyword: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

// ==================
// Routes
// ==================

/// Create catalog routes
pub fn catalog_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/", get(list_books).post(add_book))
        .route("/search", get(search_books))
        .with_state(state)
}

/// List all books in insertion order
async fn list_books(State(state): State<Arc<CatalogState>>) -> impl IntoResponse {
    let books = state.store.load_or_empty();
    (
        StatusCode::OK,
        Json(BookListResponse {
            total: books.len(),
            books,
        }),
    )
}

/// Add a book. All three fields are required and non-blank.
async fn add_book(
    State(state): State<Arc<CatalogState>>,
    Query(query): Query<LangQuery>,
    Json(request): Json<AddBookRequest>,
) -> Response {
    let title = request.title.as_deref().map(str::trim).unwrap_or("");
    let author = request.author.as_deref().map(str::trim).unwrap_or("");
    let year = request.year;

    let (title, author, year) = match (title, author, year) {
        (t, a, Some(y)) if !t.is_empty() && !a.is_empty() => (t, a, y),
        _ => {
            let translations = state.resolve_translations(query.lang.as_deref());
            let response = ErrorResponse {
                error: "missing_fields".to_string(),
                message: translations.get("all_fields_required").to_string(),
            };
            return (StatusCode::BAD_REQUEST, Json(response)).into_response();
        }
    };

    match state.store.insert(title, author, year) {
        Ok(book) => (StatusCode::CREATED, Json(book)).into_response(),
        Err(e) => {
            Logger::log_stderr(
                Severity::Error,
                "book_add_failed",
                &[("error", &e.to_string()), ("kind", e.kind())],
            );
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let response = ErrorResponse {
                error: e.kind().to_string(),
                message: "The book could not be saved.".to_string(),
            };
            (status, Json(response)).into_response()
        }
    }
}

/// Search books by keyword over title and author
async fn search_books(
    State(state): State<Arc<CatalogState>>,
    Query(query): Query<SearchQuery>,
) -> impl IntoResponse {
    let books = state.store.load_or_empty();
    let results = search::search(&books, &query.keyword);

    (
        StatusCode::OK,
        Json(SearchResponse {
            total: results.len(),
            books: results,
            keyword: query.keyword,
        }),
    )
}
