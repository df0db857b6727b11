use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::commands::AddBook;

/// 起動時に投入する初期書籍
pub fn seed_books(added_at: DateTime<Utc>) -> Vec<AddBook> {
    [
        ("1", "Blue Train", "John Coltrane", Decimal::new(5699, 2), 2),
        ("2", "Jeru", "Gerry Mulligan", Decimal::new(2799, 2), 1),
        (
            "3",
            "Sarah Vaughan and Clifford Brown",
            "Sarah Vaughan",
            Decimal::new(3999, 2),
            1,
        ),
    ]
    .into_iter()
    .map(|(id, title, author, cost, quantity)| AddBook {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        cost,
        quantity,
        total_checked_out: 0,
        added_at,
    })
    .collect()
}
