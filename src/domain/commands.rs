use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// コマンド：書籍を登録する
///
/// 入力値は未検証のまま保持する。検証は `book::add_book` で行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cost: Decimal,
    pub quantity: u32,
    pub total_checked_out: u32,
    pub added_at: DateTime<Utc>,
}

/// コマンド：書籍を貸し出す
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutBook {
    pub book_id: String,
    pub checked_out_at: DateTime<Utc>,
}

/// コマンド：書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnBook {
    pub book_id: String,
    pub returned_at: DateTime<Utc>,
}
