use crate::application::ApplicationError;

/// CLI層のエラー型
///
/// アプリケーション層のエラーをラップし、利用者向けメッセージへの対応付けを提供する。
#[derive(Debug)]
pub struct CliError(ApplicationError);

impl From<ApplicationError> for CliError {
    fn from(err: ApplicationError) -> Self {
        CliError(err)
    }
}

impl CliError {
    /// 利用者に表示するメッセージ
    ///
    /// 内部エラーの詳細はログに記録し、画面には一般的なメッセージのみを出す。
    pub fn user_message(&self) -> &'static str {
        match self.0 {
            // 操作ミス（再入力で回復可能）
            ApplicationError::AlreadyOnLoan => "Book is already on loan.",
            ApplicationError::NotBorrowedByMember => {
                "Invalid Book ID. Book not borrowed by the member."
            }
            ApplicationError::BookNotFound => "Invalid Book ID. Book not found.",
            ApplicationError::NoBooksAvailable => "No books available in the selected genre.",
            ApplicationError::MemberNotFound => "Member not found.",

            // システム障害
            ApplicationError::DueDateOutOfRange => {
                tracing::error!("Loan period produces an out-of-range due date");
                "An internal error occurred. Please try again."
            }
            ApplicationError::LoanLockPoisoned => {
                tracing::error!("Loan lock poisoned");
                "An internal error occurred. Please try again."
            }
            ApplicationError::CatalogError(ref e) => {
                tracing::error!("Catalog error: {}", e);
                "An internal error occurred. Please try again."
            }
            ApplicationError::MemberDirectoryError(ref e) => {
                tracing::error!("Member directory error: {}", e);
                "An internal error occurred. Please try again."
            }
            ApplicationError::EventLogError(ref e) => {
                tracing::error!("Event log error: {}", e);
                "An internal error occurred. Please try again."
            }
        }
    }
}
