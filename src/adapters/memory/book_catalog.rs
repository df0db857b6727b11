use crate::domain::{
    Book, BookAdded, BookCheckedOut, BookReturned, Catalog, CatalogError,
    commands::{AddBook, CheckoutBook, ReturnBook},
};
use crate::ports::book_catalog::{BookCatalog as BookCatalogTrait, Result};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::seed_books;

/// BookCatalogのインメモリ実装
///
/// プロセス全体で1つのCatalogを単一のRwLockで保護する。
/// 参照系は読み取りロック、更新系は書き込みロックの中で
/// 読み取りから書き込みまでを完結させる。
pub struct BookCatalog {
    catalog: RwLock<Catalog>,
}

impl BookCatalog {
    /// 空のカタログ
    pub fn new() -> Self {
        Self::from_catalog(Catalog::new())
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }

    /// 初期書籍3冊を投入したカタログ
    pub fn seeded() -> std::result::Result<Self, CatalogError> {
        let catalog = Catalog::with_books(seed_books(Utc::now()))?;
        Ok(Self::from_catalog(catalog))
    }
}

impl Default for BookCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookCatalogTrait for BookCatalog {
    async fn list(&self) -> Result<Vec<Book>> {
        Ok(self.catalog.read().await.list())
    }

    async fn find_by_id(&self, id: &str) -> Result<Book> {
        self.catalog.read().await.find_by_id(id).cloned()
    }

    async fn add(&self, cmd: AddBook) -> Result<(Book, BookAdded)> {
        self.catalog.write().await.add(cmd)
    }

    async fn checkout(&self, cmd: CheckoutBook) -> Result<(Book, BookCheckedOut)> {
        self.catalog.write().await.checkout(&cmd)
    }

    async fn return_book(&self, cmd: ReturnBook) -> Result<(Book, BookReturned)> {
        self.catalog.write().await.return_book(&cmd)
    }
}
