use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::domain::{Book, commands::AddBook};

/// 書籍レスポンス（GET /books, GET /book/:id など）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub cost: Decimal,
    pub qty: u32,
    pub total_checked_out: u32,
    pub available: bool,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().value().to_string(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            cost: book.cost().value(),
            qty: book.quantity(),
            total_checked_out: book.total_checked_out(),
            available: book.is_available(),
        }
    }
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self::from(&book)
    }
}

/// 書籍登録リクエスト（POST /book）
///
/// 省略されたフィールドと `null` はゼロ値になる。`available` は算出値なので受け付けても無視する。
#[derive(Debug, Default, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, deserialize_with = "number_or_null")]
    pub cost: Option<Decimal>,
    #[serde(default)]
    pub qty: u32,
    #[serde(default)]
    pub total_checked_out: u32,
}

impl CreateBookRequest {
    pub fn to_command(self, added_at: DateTime<Utc>) -> AddBook {
        AddBook {
            id: self.id,
            title: self.title,
            author: self.author,
            cost: self.cost.unwrap_or_default(),
            quantity: self.qty,
            total_checked_out: self.total_checked_out,
            added_at,
        }
    }
}

/// `cost` はJSONの数値のみ受け付ける（文字列は拒否）
fn number_or_null<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    value
        .to_string()
        .parse::<Decimal>()
        .map(Some)
        .map_err(|_| de::Error::invalid_value(de::Unexpected::Float(value), &"a decimal number"))
}

/// 貸出・返却のクエリパラメータ（?id=）
///
/// `id` が複数指定された場合は最初の値を使う。
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BookIdQuery {
    pub id: Option<String>,
}

impl BookIdQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let id = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "id").then_some(value));
        Self { id }
    }
}

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// 貸出・返却の失敗時のみ、書籍の現在状態を添える
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<BookResponse>,
}

impl ErrorResponse {
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error_type.into(),
            message: message.into(),
            book: None,
        }
    }

    pub fn with_book(mut self, book: &Book) -> Self {
        self.book = Some(BookResponse::from(book));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::add_book;
    use serde_json::json;

    fn sample_book() -> Book {
        let cmd = AddBook {
            id: "1".to_string(),
            title: "Blue Train".to_string(),
            author: "John Coltrane".to_string(),
            cost: Decimal::new(5699, 2),
            quantity: 2,
            total_checked_out: 0,
            added_at: Utc::now(),
        };
        add_book(cmd).unwrap().0
    }

    #[test]
    fn test_book_response_uses_wire_field_names() {
        let value = serde_json::to_value(BookResponse::from(sample_book())).unwrap();

        assert_eq!(value["id"], "1");
        assert_eq!(value["title"], "Blue Train");
        assert_eq!(value["author"], "John Coltrane");
        assert!(value["cost"].is_number());
        assert_eq!(value["qty"], 2);
        assert_eq!(value["total_checked_out"], 0);
        assert_eq!(value["available"], true);
        assert!(value.get("quantity").is_none());
    }

    #[test]
    fn test_create_book_request_defaults_missing_fields() {
        let req: CreateBookRequest = serde_json::from_value(json!({ "id": "9" })).unwrap();

        assert_eq!(req.id, "9");
        assert_eq!(req.title, "");
        assert_eq!(req.author, "");
        assert_eq!(req.cost, None);
        assert_eq!(req.qty, 0);
        assert_eq!(req.total_checked_out, 0);
        assert_eq!(req.to_command(Utc::now()).cost, Decimal::ZERO);
    }

    #[test]
    fn test_create_book_request_cost_null_is_zero() {
        let req: CreateBookRequest =
            serde_json::from_value(json!({ "id": "9", "cost": null })).unwrap();
        assert_eq!(req.to_command(Utc::now()).cost, Decimal::ZERO);
    }

    #[test]
    fn test_create_book_request_cost_keeps_decimal_digits() {
        let req: CreateBookRequest =
            serde_json::from_str(r#"{ "id": "9", "cost": 45.99 }"#).unwrap();
        assert_eq!(req.cost, Some(Decimal::new(4599, 2)));

        let req: CreateBookRequest = serde_json::from_str(r#"{ "id": "9", "cost": 12 }"#).unwrap();
        assert_eq!(req.cost, Some(Decimal::new(12, 0)));
    }

    #[test]
    fn test_create_book_request_rejects_string_cost() {
        let result: Result<CreateBookRequest, _> =
            serde_json::from_value(json!({ "id": "9", "cost": "12.5" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_book_id_query_first_id_wins() {
        let query = BookIdQuery::from_pairs(vec![
            ("foo".to_string(), "x".to_string()),
            ("id".to_string(), "1".to_string()),
            ("id".to_string(), "2".to_string()),
        ]);
        assert_eq!(query.id.as_deref(), Some("1"));
    }

    #[test]
    fn test_book_id_query_without_id() {
        let query = BookIdQuery::from_pairs(vec![("foo".to_string(), "1".to_string())]);
        assert_eq!(query, BookIdQuery::default());
    }

    #[test]
    fn test_create_book_request_ignores_available() {
        let req: CreateBookRequest = serde_json::from_value(json!({
            "id": "9",
            "qty": 1,
            "available": false
        }))
        .unwrap();

        let cmd = req.to_command(Utc::now());
        assert_eq!(cmd.id, "9");
        assert_eq!(cmd.quantity, 1);
    }

    #[test]
    fn test_create_book_request_rejects_negative_qty() {
        let result: Result<CreateBookRequest, _> =
            serde_json::from_value(json!({ "id": "9", "qty": -1 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_error_response_omits_book_when_absent() {
        let value = serde_json::to_value(ErrorResponse::new("BOOK_NOT_FOUND", "missing")).unwrap();

        assert_eq!(value["error"], "BOOK_NOT_FOUND");
        assert_eq!(value["message"], "missing");
        assert!(value.get("book").is_none());
    }

    #[test]
    fn test_error_response_with_book_snapshot() {
        let response = ErrorResponse::new("BOOK_UNAVAILABLE", "no copies").with_book(&sample_book());
        let value = serde_json::to_value(response).unwrap();

        assert_eq!(value["book"]["id"], "1");
        assert_eq!(value["book"]["qty"], 2);
    }
}
