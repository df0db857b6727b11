use crate::application::catalog::CatalogApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(CatalogApplicationError);

impl From<CatalogApplicationError> for ApiError {
    fn from(err: CatalogApplicationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();

        let (status, body) = match self.0 {
            // 404 Not Found - リクエストされた書籍が存在しない
            CatalogApplicationError::BookNotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new("BOOK_NOT_FOUND", message),
            ),

            // 400 Bad Request - 入力値の不正
            CatalogApplicationError::InvalidArgument(_) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("INVALID_ARGUMENT", message),
            ),

            // 409 Conflict - IDの重複
            CatalogApplicationError::BookAlreadyExists(_) => (
                StatusCode::CONFLICT,
                ErrorResponse::new("BOOK_ALREADY_EXISTS", message),
            ),

            // 400 Bad Request - 在庫・貸出状態による拒否（書籍の現在状態を添える）
            CatalogApplicationError::BookUnavailable(ref book) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BOOK_UNAVAILABLE", message).with_book(book),
            ),
            CatalogApplicationError::NothingToReturn(ref book) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("NOTHING_TO_RETURN", message).with_book(book),
            ),
        };

        (status, Json(body)).into_response()
    }
}
