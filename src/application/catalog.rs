use crate::domain::{Book, BookId};

use super::dependencies::ServiceDependencies;
use super::errors::{ApplicationError, Result};

/// 全書籍をカタログ順に返す
pub fn all_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    deps.catalog
        .all_books()
        .map_err(ApplicationError::CatalogError)
}

/// 全書籍のジャンルを返す（1冊につき1件、重複を含む）
pub fn list_genres(deps: &ServiceDependencies) -> Result<Vec<String>> {
    deps.catalog
        .list_genres()
        .map_err(ApplicationError::CatalogError)
}

/// ジャンルに一致する貸出可能な書籍をカタログ順に返す（空の場合もある）
pub fn find_available_by_genre(deps: &ServiceDependencies, genre: &str) -> Result<Vec<Book>> {
    let books = deps
        .catalog
        .find_available_by_genre(genre)
        .map_err(ApplicationError::CatalogError)?;

    tracing::debug!(genre, count = books.len(), "available books looked up");
    Ok(books)
}

/// 貸出候補としてジャンルの貸出可能な書籍を提示する
///
/// # エラー
/// - NoBooksAvailable: 該当する書籍が1冊もない
pub fn offer_books_in_genre(deps: &ServiceDependencies, genre: &str) -> Result<Vec<Book>> {
    let books = find_available_by_genre(deps, genre)?;
    if books.is_empty() {
        return Err(ApplicationError::NoBooksAvailable);
    }
    Ok(books)
}

/// 提示した候補の中から書籍を選ぶ
///
/// # エラー
/// - BookNotFound: 候補に含まれないID
pub fn select_offered_book(offered: &[Book], book_id: BookId) -> Result<&Book> {
    offered
        .iter()
        .find(|b| b.book_id == book_id)
        .ok_or(ApplicationError::BookNotFound)
}

/// IDで書籍を取得する（貸出状態は問わない）
pub fn find_book(deps: &ServiceDependencies, book_id: BookId) -> Result<Book> {
    deps.catalog
        .find_by_id(book_id)
        .map_err(ApplicationError::CatalogError)?
        .ok_or(ApplicationError::BookNotFound)
}

/// 書籍IDの列を順序と重複を保ったまま書籍に解決する
pub(crate) fn resolve_books(deps: &ServiceDependencies, book_ids: &[BookId]) -> Result<Vec<Book>> {
    book_ids.iter().map(|id| find_book(deps, *id)).collect()
}
