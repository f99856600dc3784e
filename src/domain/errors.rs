/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueBookError {
    /// 既に貸出中
    AlreadyOnLoan,
    /// 貸出期間から返却期限を求められない
    DueDateOutOfRange,
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnBookError {
    /// 会員の貸出リストに該当する書籍がない
    NotBorrowedByMember,
}
