use super::{
    AddBookError, BookAdded, BookCheckedOut, BookId, BookReturned, CheckoutBookError, Cost,
    ReturnBookError,
    commands::{AddBook, CheckoutBook, ReturnBook},
};

/// Book エンティティ - カタログ上の1タイトル
///
/// 不変条件：`total_checked_out <= quantity`
/// フィールドは非公開とし、状態遷移は純粋関数経由でのみ行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    cost: Cost,
    /// 所蔵数（物理的な冊数）
    quantity: u32,
    /// 貸出中の冊数
    total_checked_out: u32,
}

impl Book {
    pub fn id(&self) -> &BookId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_checked_out(&self) -> u32 {
        self.total_checked_out
    }

    /// 残り貸出可能冊数
    pub fn remaining(&self) -> u32 {
        self.quantity - self.total_checked_out
    }

    /// 貸出可能か
    ///
    /// キャッシュせず、毎回 (total_checked_out, quantity) から算出する。
    pub fn is_available(&self) -> bool {
        self.total_checked_out < self.quantity
    }
}

/// 純粋関数：書籍を登録する
///
/// ビジネスルール：
/// - IDは空文字列不可
/// - 価格は0以上
/// - 貸出中の冊数は所蔵数以下
///
/// 副作用なし。新しいBookとイベントを返す。
pub fn add_book(cmd: AddBook) -> Result<(Book, BookAdded), AddBookError> {
    let id = BookId::try_from(cmd.id)?;
    let cost = Cost::try_from(cmd.cost)?;

    if cmd.total_checked_out > cmd.quantity {
        return Err(AddBookError::CheckedOutExceedsQuantity {
            quantity: cmd.quantity,
            total_checked_out: cmd.total_checked_out,
        });
    }

    let book = Book {
        id,
        title: cmd.title,
        author: cmd.author,
        cost,
        quantity: cmd.quantity,
        total_checked_out: cmd.total_checked_out,
    };

    let event = BookAdded {
        book_id: book.id.clone(),
        quantity: book.quantity,
        added_at: cmd.added_at,
    };

    Ok((book, event))
}

/// 純粋関数：書籍を貸し出す
///
/// ビジネスルール：
/// - 貸出中の冊数が所蔵数に達している場合は貸出不可
/// - 所蔵数は変更しない
///
/// 副作用なし。新しいBookとイベントを返す。
pub fn checkout_book(
    book: &Book,
    cmd: &CheckoutBook,
) -> Result<(Book, BookCheckedOut), CheckoutBookError> {
    if !book.is_available() {
        return Err(CheckoutBookError::NoCopiesAvailable);
    }

    let new_book = Book {
        total_checked_out: book.total_checked_out + 1,
        ..book.clone()
    };

    let event = BookCheckedOut {
        book_id: new_book.id.clone(),
        total_checked_out: new_book.total_checked_out,
        remaining: new_book.remaining(),
        checked_out_at: cmd.checked_out_at,
    };

    Ok((new_book, event))
}

/// 純粋関数：書籍を返却する
///
/// ビジネスルール：
/// - 貸出中の冊数が0の場合は返却不可
///
/// 副作用なし。新しいBookとイベントを返す。
pub fn return_book(book: &Book, cmd: &ReturnBook) -> Result<(Book, BookReturned), ReturnBookError> {
    if book.total_checked_out == 0 {
        return Err(ReturnBookError::NothingCheckedOut);
    }

    let new_book = Book {
        total_checked_out: book.total_checked_out - 1,
        ..book.clone()
    };

    let event = BookReturned {
        book_id: new_book.id.clone(),
        total_checked_out: new_book.total_checked_out,
        remaining: new_book.remaining(),
        returned_at: cmd.returned_at,
    };

    Ok((new_book, event))
}
