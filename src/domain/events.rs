use chrono::{DateTime, Utc};

use super::BookId;

/// イベント：書籍が登録された
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookAdded {
    pub book_id: BookId,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

/// イベント：書籍が貸し出された
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCheckedOut {
    pub book_id: BookId,
    pub total_checked_out: u32,
    pub remaining: u32,
    pub checked_out_at: DateTime<Utc>,
}

/// イベント：書籍が返却された
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookReturned {
    pub book_id: BookId,
    pub total_checked_out: u32,
    pub remaining: u32,
    pub returned_at: DateTime<Utc>,
}

/// ドメインイベント統合型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainEvent {
    BookAdded(BookAdded),
    BookCheckedOut(BookCheckedOut),
    BookReturned(BookReturned),
}

impl From<BookAdded> for DomainEvent {
    fn from(event: BookAdded) -> Self {
        DomainEvent::BookAdded(event)
    }
}

impl From<BookCheckedOut> for DomainEvent {
    fn from(event: BookCheckedOut) -> Self {
        DomainEvent::BookCheckedOut(event)
    }
}

impl From<BookReturned> for DomainEvent {
    fn from(event: BookReturned) -> Self {
        DomainEvent::BookReturned(event)
    }
}
