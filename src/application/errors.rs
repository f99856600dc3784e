use thiserror::Error;

use crate::domain::{IssueBookError, ReturnBookError};

/// アプリケーション層のエラー
///
/// どれもプロセスを終了させない。呼び出し側（メニュー）がメッセージを表示して続行する。
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 貸出中の書籍を貸し出そうとした
    #[error("Book is already on loan")]
    AlreadyOnLoan,

    /// 会員が借りていない書籍を返却しようとした
    #[error("Book is not borrowed by the member")]
    NotBorrowedByMember,

    /// 指定された書籍が存在しない（または提示された候補に含まれない）
    #[error("Book not found")]
    BookNotFound,

    /// ジャンルに貸出可能な書籍がない
    #[error("No books available in the selected genre")]
    NoBooksAvailable,

    /// 貸出期間の設定から返却期限を求められない
    #[error("Due date is out of range for the configured loan period")]
    DueDateOutOfRange,

    /// 会員が存在しない
    #[error("Member not found")]
    MemberNotFound,

    /// 貸出ロックが壊れている
    #[error("Loan lock poisoned")]
    LoanLockPoisoned,

    /// Catalogのエラー
    #[error("Catalog error")]
    CatalogError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MemberDirectoryのエラー
    #[error("Member directory error")]
    MemberDirectoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// EventLogのエラー
    #[error("Event log error")]
    EventLogError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<IssueBookError> for ApplicationError {
    fn from(err: IssueBookError) -> Self {
        match err {
            IssueBookError::AlreadyOnLoan => ApplicationError::AlreadyOnLoan,
            IssueBookError::DueDateOutOfRange => ApplicationError::DueDateOutOfRange,
        }
    }
}

impl From<ReturnBookError> for ApplicationError {
    fn from(err: ReturnBookError) -> Self {
        match err {
            ReturnBookError::NotBorrowedByMember => ApplicationError::NotBorrowedByMember,
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, ApplicationError>;
