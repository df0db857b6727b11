use indexmap::IndexMap;

use super::{
    Book, BookAdded, BookCheckedOut, BookId, BookReturned, CatalogError,
    book::{add_book, checkout_book, return_book},
    commands::{AddBook, CheckoutBook, ReturnBook},
};

/// Catalog集約 - 所蔵書籍の集合
///
/// 書籍は登録順に保持され、IDで引く。
/// 書籍は追加のみで削除されない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: IndexMap<BookId, Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期データから構築する
    ///
    /// IDが重複する場合は最初の失敗を返す。
    pub fn with_books(commands: impl IntoIterator<Item = AddBook>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for cmd in commands {
            catalog.add(cmd)?;
        }
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// 全書籍を登録順に返す
    pub fn list(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    /// IDで書籍を取得する
    pub fn find_by_id(&self, id: &str) -> Result<&Book, CatalogError> {
        self.books
            .get(id)
            .ok_or_else(|| CatalogError::BookNotFound(id.to_string()))
    }

    /// 書籍を末尾に追加する
    ///
    /// 同じIDの書籍が既にある場合は追加せず `DuplicateBookId` を返す。
    pub fn add(&mut self, cmd: AddBook) -> Result<(Book, BookAdded), CatalogError> {
        let (book, event) = add_book(cmd)?;

        if self.books.contains_key(book.id()) {
            return Err(CatalogError::DuplicateBookId(book.id().clone()));
        }

        self.books.insert(book.id().clone(), book.clone());
        Ok((book, event))
    }

    /// 書籍を貸し出す
    ///
    /// 在庫切れの場合は状態を変更せず、現在の書籍を添えて `Unavailable` を返す。
    pub fn checkout(&mut self, cmd: &CheckoutBook) -> Result<(Book, BookCheckedOut), CatalogError> {
        let slot = self.slot_mut(&cmd.book_id)?;

        let (new_book, event) = checkout_book(slot, cmd)
            .map_err(|_| CatalogError::Unavailable(Box::new(slot.clone())))?;

        *slot = new_book.clone();
        Ok((new_book, event))
    }

    /// 書籍を返却する
    ///
    /// 貸出中の冊数が0の場合は状態を変更せず `NothingToReturn` を返す。
    pub fn return_book(&mut self, cmd: &ReturnBook) -> Result<(Book, BookReturned), CatalogError> {
        let slot = self.slot_mut(&cmd.book_id)?;

        let (new_book, event) = return_book(slot, cmd)
            .map_err(|_| CatalogError::NothingToReturn(Box::new(slot.clone())))?;

        *slot = new_book.clone();
        Ok((new_book, event))
    }

    fn slot_mut(&mut self, id: &str) -> Result<&mut Book, CatalogError> {
        self.books
            .get_mut(id)
            .ok_or_else(|| CatalogError::BookNotFound(id.to_string()))
    }
}
