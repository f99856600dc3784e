use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookId, MemberId};

/// 貸出状態
///
/// 借り手と返却期限は常に対で存在する。片方だけが設定された状態は型で表現できない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLoan {
    /// 借り手への非所有参照（IDのみ）
    pub borrower: MemberId,
    pub due_date: DateTime<Utc>,
}

/// 書籍
///
/// カタログが排他的に所有する。状態は「貸出可能」と「貸出中」の2つだけで、
/// 延滞は保存される状態ではなく`now > due_date`から導出される述語。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub genre: String,
    loan: Option<BookLoan>,
}

impl Book {
    /// 貸出可能な状態で書籍を作成する
    pub fn new(book_id: BookId, title: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            book_id,
            title: title.into(),
            genre: genre.into(),
            loan: None,
        }
    }

    pub fn loan(&self) -> Option<&BookLoan> {
        self.loan.as_ref()
    }

    pub fn borrower(&self) -> Option<MemberId> {
        self.loan.as_ref().map(|loan| loan.borrower)
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.loan.as_ref().map(|loan| loan.due_date)
    }

    pub fn is_available(&self) -> bool {
        self.loan.is_none()
    }

    /// 貸出中の状態に遷移した書籍を返す
    pub(crate) fn lent_to(self, borrower: MemberId, due_date: DateTime<Utc>) -> Self {
        Self {
            loan: Some(BookLoan { borrower, due_date }),
            ..self
        }
    }

    /// 貸出可能な状態に戻した書籍を返す
    pub(crate) fn released(self) -> Self {
        Self { loan: None, ..self }
    }
}
