use crate::domain::{Book, BookId};
use crate::ports::catalog::{Catalog as CatalogTrait, Result};
use std::sync::{Mutex, MutexGuard};

use super::seed::seed_books;

/// Catalogのインメモリ実装
///
/// 書籍をカタログ順のVecで保持し、すべての検索を線形走査で行う。
pub struct Catalog {
    books: Mutex<Vec<Book>>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }

    /// 初期蔵書17冊を登録したカタログ
    pub fn seeded() -> Self {
        Self::new(seed_books())
    }

    fn books(&self) -> Result<MutexGuard<'_, Vec<Book>>> {
        Ok(self.books.lock().map_err(|_| "catalog lock poisoned")?)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl CatalogTrait for Catalog {
    fn list_genres(&self) -> Result<Vec<String>> {
        Ok(self.books()?.iter().map(|b| b.genre.clone()).collect())
    }

    fn find_available_by_genre(&self, genre: &str) -> Result<Vec<Book>> {
        Ok(self
            .books()?
            .iter()
            .filter(|b| b.genre == genre && b.is_available())
            .cloned()
            .collect())
    }

    fn find_by_id(&self, book_id: BookId) -> Result<Option<Book>> {
        Ok(self.books()?.iter().find(|b| b.book_id == book_id).cloned())
    }

    fn all_books(&self) -> Result<Vec<Book>> {
        Ok(self.books()?.clone())
    }

    fn save(&self, book: Book) -> Result<()> {
        let mut books = self.books()?;
        let slot = books
            .iter_mut()
            .find(|b| b.book_id == book.book_id)
            .ok_or_else(|| format!("book {} is not in the catalog", book.book_id))?;
        *slot = book;
        Ok(())
    }
}
