use crate::domain::{AddBookError, Book, CatalogError};
use thiserror::Error;

/// カタログアプリケーション層のエラー
#[derive(Debug, Error)]
pub enum CatalogApplicationError {
    /// 書籍が存在しない
    #[error("The book with id {0} was not found.")]
    BookNotFound(String),

    /// 入力値が不正
    #[error("{0}")]
    InvalidArgument(String),

    /// 同じIDの書籍が既に存在する
    #[error("A book with id {0} already exists.")]
    BookAlreadyExists(String),

    /// 在庫切れのため貸出不可
    #[error("Book can't be checked out")]
    BookUnavailable(Box<Book>),

    /// 貸出中の冊数が0のため返却不可
    #[error("Book can't be returned")]
    NothingToReturn(Box<Book>),
}

impl From<CatalogError> for CatalogApplicationError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::BookNotFound(id) => CatalogApplicationError::BookNotFound(id),
            CatalogError::DuplicateBookId(id) => {
                CatalogApplicationError::BookAlreadyExists(id.to_string())
            }
            CatalogError::InvalidBook(e) => {
                CatalogApplicationError::InvalidArgument(describe_add_book_error(&e))
            }
            CatalogError::Unavailable(book) => CatalogApplicationError::BookUnavailable(book),
            CatalogError::NothingToReturn(book) => CatalogApplicationError::NothingToReturn(book),
        }
    }
}

fn describe_add_book_error(err: &AddBookError) -> String {
    match err {
        AddBookError::InvalidId(e) => e.to_string(),
        AddBookError::InvalidCost(e) => e.to_string(),
        AddBookError::CheckedOutExceedsQuantity {
            quantity,
            total_checked_out,
        } => format!("total_checked_out ({total_checked_out}) cannot exceed qty ({quantity})"),
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, CatalogApplicationError>;
