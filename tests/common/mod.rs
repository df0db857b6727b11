#![allow(dead_code)]

use chrono::Utc;
use rust_decimal::Decimal;
use rusty_catalog::adapters::memory::BookCatalog as InMemoryBookCatalog;
use rusty_catalog::application::catalog::ServiceDependencies;
use rusty_catalog::domain::commands::{AddBook, CheckoutBook, ReturnBook};
use std::sync::Arc;

/// 初期書籍3冊を投入した依存関係を作成
///
/// テストごとに独立したカタログを使うため、毎回新しく構築する。
pub fn seeded_deps() -> ServiceDependencies {
    let book_catalog = Arc::new(InMemoryBookCatalog::seeded().expect("Failed to seed catalog"));
    ServiceDependencies { book_catalog }
}

/// 空のカタログの依存関係を作成
pub fn empty_deps() -> ServiceDependencies {
    ServiceDependencies {
        book_catalog: Arc::new(InMemoryBookCatalog::new()),
    }
}

pub fn add_cmd(id: &str, quantity: u32) -> AddBook {
    AddBook {
        id: id.to_string(),
        title: "Kind of Blue".to_string(),
        author: "Miles Davis".to_string(),
        cost: Decimal::new(4599, 2),
        quantity,
        total_checked_out: 0,
        added_at: Utc::now(),
    }
}

pub fn checkout_cmd(id: &str) -> CheckoutBook {
    CheckoutBook {
        book_id: id.to_string(),
        checked_out_at: Utc::now(),
    }
}

pub fn return_cmd(id: &str) -> ReturnBook {
    ReturnBook {
        book_id: id.to_string(),
        returned_at: Utc::now(),
    }
}
