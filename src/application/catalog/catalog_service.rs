use crate::domain::{Book, DomainEvent, commands::*};
use crate::ports::BookCatalog;
use std::sync::Arc;

use super::errors::{CatalogApplicationError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞い（メソッド）は持たず、ユースケース関数に依存関係を渡す。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_catalog: Arc<dyn BookCatalog>,
}

/// ドメインイベントをログに記録する
///
/// イベントは永続化しない。監査用途のトレースのみ。
fn record_event(event: &DomainEvent) {
    match event {
        DomainEvent::BookAdded(e) => tracing::info!(
            book_id = %e.book_id,
            quantity = e.quantity,
            added_at = %e.added_at,
            "book added"
        ),
        DomainEvent::BookCheckedOut(e) => tracing::info!(
            book_id = %e.book_id,
            total_checked_out = e.total_checked_out,
            remaining = e.remaining,
            checked_out_at = %e.checked_out_at,
            "book checked out"
        ),
        DomainEvent::BookReturned(e) => tracing::info!(
            book_id = %e.book_id,
            total_checked_out = e.total_checked_out,
            remaining = e.remaining,
            returned_at = %e.returned_at,
            "book returned"
        ),
    }
}

/// 拒否された操作をログに記録する
///
/// 呼び出し側の誤りなのでdebugレベル。
fn log_rejection(operation: &str, err: &CatalogApplicationError) {
    tracing::debug!(operation, error = %err, "catalog operation rejected");
}

/// 全書籍を登録順に取得する
pub async fn list_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    let books = deps.book_catalog.list().await?;
    Ok(books)
}

/// IDで書籍を取得する
///
/// # エラー
/// - BookNotFound: 指定IDの書籍が存在しない
pub async fn get_book(deps: &ServiceDependencies, id: &str) -> Result<Book> {
    let book = deps.book_catalog.find_by_id(id).await?;
    Ok(book)
}

/// 書籍を登録する
///
/// ビジネスルール：
/// - IDは空文字列不可
/// - 同じIDの書籍は登録不可
/// - 価格は0以上、貸出中の冊数は所蔵数以下
///
/// # 戻り値
/// 登録された書籍（カタログの末尾に追加される）
pub async fn add_book(deps: &ServiceDependencies, cmd: AddBook) -> Result<Book> {
    let (book, event) = deps
        .book_catalog
        .add(cmd)
        .await
        .map_err(CatalogApplicationError::from)
        .inspect_err(|e| log_rejection("add_book", e))?;

    record_event(&event.into());
    Ok(book)
}

/// 書籍を1冊貸し出す
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - 貸出中の冊数が所蔵数未満であること
///
/// 在庫切れの場合は `BookUnavailable` に書籍の現在状態を添えて返す。
pub async fn checkout_book(deps: &ServiceDependencies, cmd: CheckoutBook) -> Result<Book> {
    let (book, event) = deps
        .book_catalog
        .checkout(cmd)
        .await
        .map_err(CatalogApplicationError::from)
        .inspect_err(|e| log_rejection("checkout_book", e))?;

    record_event(&event.into());
    Ok(book)
}

/// 書籍を1冊返却する
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - 貸出中の冊数が1以上であること
pub async fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> Result<Book> {
    let (book, event) = deps
        .book_catalog
        .return_book(cmd)
        .await
        .map_err(CatalogApplicationError::from)
        .inspect_err(|e| log_rejection("return_book", e))?;

    record_event(&event.into());
    Ok(book)
}
