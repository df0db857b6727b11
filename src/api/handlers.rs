use crate::application::catalog::{
    ServiceDependencies, add_book as execute_add_book, checkout_book as execute_checkout_book,
    get_book as execute_get_book, list_books as execute_list_books,
    return_book as execute_return_book,
};
use crate::domain::commands::{CheckoutBook, ReturnBook};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{BookIdQuery, BookResponse, CreateBookRequest, ErrorResponse},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books - 全書籍を登録順に取得
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = execute_list_books(&state.service_deps).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// GET /book/:id - 書籍をIDで取得
///
/// 見つからない場合は404を返す。
pub async fn get_book_by_id(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<BookResponse>, Response> {
    let Path(id) = path.map_err(|rejection| {
        RequestError::BadRequest(rejection.body_text()).into_response()
    })?;

    let book = execute_get_book(&state.service_deps, &id)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;
    Ok(Json(BookResponse::from(book)))
}

// ============================================================================
// Command handlers (POST / PATCH)
// ============================================================================

/// POST /book - 書籍を登録
///
/// 強制されるビジネスルール:
/// - IDが空でないこと
/// - 同じIDの書籍が存在しないこと
/// - 価格が0以上、貸出中の冊数が所蔵数以下であること
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookResponse>), Response> {
    let Json(req) = payload.map_err(|rejection| {
        RequestError::BadRequest(rejection.body_text()).into_response()
    })?;

    let cmd = req.to_command(chrono::Utc::now());
    let book = execute_add_book(&state.service_deps, cmd)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    Ok((StatusCode::CREATED, Json(BookResponse::from(book))))
}

/// PATCH /checkout?id= - 書籍を1冊貸し出す
///
/// 強制されるビジネスルール:
/// - 書籍が存在すること
/// - 貸出中の冊数が所蔵数未満であること（在庫切れ時は書籍の現在状態を添えて400）
pub async fn checkout_book(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<BookResponse>, Response> {
    let book_id = required_id(query)?;

    let cmd = CheckoutBook {
        book_id,
        checked_out_at: chrono::Utc::now(),
    };

    let book = execute_checkout_book(&state.service_deps, cmd)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    Ok(Json(BookResponse::from(book)))
}

/// PATCH /return?id= - 書籍を1冊返却する
///
/// 強制されるビジネスルール:
/// - 書籍が存在すること
/// - 貸出中の冊数が1以上であること
pub async fn return_book(
    State(state): State<Arc<AppState>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<BookResponse>, Response> {
    let book_id = required_id(query)?;

    let cmd = ReturnBook {
        book_id,
        returned_at: chrono::Utc::now(),
    };

    let book = execute_return_book(&state.service_deps, cmd)
        .await
        .map_err(|e| ApiError::from(e).into_response())?;

    Ok(Json(BookResponse::from(book)))
}

/// `?id=` が指定されていなければ400
fn required_id(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<String, Response> {
    let Query(pairs) = query.map_err(|rejection| {
        RequestError::BadRequest(rejection.body_text()).into_response()
    })?;

    BookIdQuery::from_pairs(pairs).id.ok_or_else(|| {
        RequestError::BadRequest("missing id query parameter".to_string()).into_response()
    })
}

// ============================================================================
// Error types
// ============================================================================

/// リクエストの解釈に失敗した場合のエラー型
///
/// カタログに到達する前の失敗（パス・クエリの解釈失敗、クエリパラメータ不足、JSON不正）を表す。
#[derive(Debug)]
pub enum RequestError {
    BadRequest(String),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            RequestError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
        };

        tracing::debug!(%status, message = %message, "request rejected");

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
