use crate::domain::{
    Book, BookAdded, BookCheckedOut, BookReturned, CatalogError,
    commands::{AddBook, CheckoutBook, ReturnBook},
};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// 書籍カタログポート
///
/// 書籍の保管場所を抽象化する。
/// 実装は各操作を原子的に行うこと（貸出・返却・登録の読み取りと書き込みの間に
/// 他の更新を挟まない）。
#[async_trait]
pub trait BookCatalog: Send + Sync {
    /// 全書籍を登録順に取得する
    async fn list(&self) -> Result<Vec<Book>>;

    /// IDで書籍を取得する
    ///
    /// 見つからない場合は `CatalogError::BookNotFound` を返す。
    async fn find_by_id(&self, id: &str) -> Result<Book>;

    /// 書籍を追加する
    async fn add(&self, cmd: AddBook) -> Result<(Book, BookAdded)>;

    /// 書籍を1冊貸し出す
    async fn checkout(&self, cmd: CheckoutBook) -> Result<(Book, BookCheckedOut)>;

    /// 書籍を1冊返却する
    async fn return_book(&self, cmd: ReturnBook) -> Result<(Book, BookReturned)>;
}
