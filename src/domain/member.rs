use serde::{Deserialize, Serialize};

use super::{BookId, ContactInfo, MemberId};

/// 会員
///
/// 借りている書籍はIDの列として保持する（挿入順 = 貸出順）。
/// 列に含まれるすべての書籍は`borrower == member_id`でなければならず、
/// 両側の整合性は貸出サービスが維持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: MemberId,
    pub contact: ContactInfo,
    borrowed_books: Vec<BookId>,
}

impl Member {
    pub fn new(member_id: MemberId, contact: ContactInfo) -> Self {
        Self {
            member_id,
            contact,
            borrowed_books: Vec::new(),
        }
    }

    /// 貸出リストの末尾に追加する
    ///
    /// 重複チェックは行わない。同じ書籍を2回追加すると2件になる。
    pub fn add_borrowed(&mut self, book_id: BookId) {
        self.borrowed_books.push(book_id);
    }

    /// 挿入順に走査し、最初に一致したエントリだけを取り除く
    pub fn remove_borrowed(&mut self, book_id: BookId) -> Option<BookId> {
        let index = self.borrowed_books.iter().position(|id| *id == book_id)?;
        Some(self.borrowed_books.remove(index))
    }

    pub fn borrowed_books(&self) -> &[BookId] {
        &self.borrowed_books
    }

    pub fn holds(&self, book_id: BookId) -> bool {
        self.borrowed_books.contains(&book_id)
    }
}
