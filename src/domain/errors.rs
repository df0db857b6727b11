use super::{Book, BookId, BookIdError, CostError};

/// 書籍登録のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddBookError {
    /// IDが不正（空文字列）
    InvalidId(BookIdError),
    /// 価格が不正（負の値）
    InvalidCost(CostError),
    /// 貸出中の冊数が所蔵数を超えている
    CheckedOutExceedsQuantity { quantity: u32, total_checked_out: u32 },
}

impl From<BookIdError> for AddBookError {
    fn from(err: BookIdError) -> Self {
        AddBookError::InvalidId(err)
    }
}

impl From<CostError> for AddBookError {
    fn from(err: CostError) -> Self {
        AddBookError::InvalidCost(err)
    }
}

/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutBookError {
    /// 貸出可能な在庫がない
    NoCopiesAvailable,
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnBookError {
    /// 貸出中の冊数が0
    NothingCheckedOut,
}

/// カタログ操作のエラー
///
/// 貸出・返却の失敗時は、クライアント表示用に書籍の現在状態を保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// 指定IDの書籍が存在しない
    BookNotFound(String),
    /// 同じIDの書籍が既に存在する
    DuplicateBookId(BookId),
    /// 登録内容が不正
    InvalidBook(AddBookError),
    /// 貸出不可（在庫切れ）
    Unavailable(Box<Book>),
    /// 返却不可（貸出中の冊数が0）
    NothingToReturn(Box<Book>),
}

impl From<AddBookError> for CatalogError {
    fn from(err: AddBookError) -> Self {
        CatalogError::InvalidBook(err)
    }
}
