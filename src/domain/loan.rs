use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Book, BookId, BookIssued, BookReturned, DomainEvent, IssueBookError, Member, ReturnBookError,
    StaffId,
};

/// 貸出期間（日数）の既定値
///
/// 0日 = 貸出時刻そのものが返却期限になる。
pub const LOAN_PERIOD_DAYS: i64 = 0;

/// 1日あたりの延滞料金
pub const FINE_PER_DAY: f64 = 1.0;

/// 貸出ルールのパラメータ
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanPolicy {
    pub loan_period_days: i64,
    pub fine_per_day: f64,
}

impl LoanPolicy {
    /// 貸出時刻から返却期限を求める
    ///
    /// 表現できない日時になる場合は`None`。
    pub fn due_date_for(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        Duration::try_days(self.loan_period_days)
            .and_then(|period| issued_at.checked_add_signed(period))
    }
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            loan_period_days: LOAN_PERIOD_DAYS,
            fine_per_day: FINE_PER_DAY,
        }
    }
}

/// 延滞料金の明細1行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FineLine {
    pub book_id: BookId,
    pub overdue_days: i64,
    pub amount: f64,
}

/// 純粋関数：書籍を貸し出す
///
/// ビジネスルール：
/// - 貸出中の書籍は貸し出せない
/// - 返却期限は`policy.due_date_for(issued_at)`（表現できなければ貸し出さない）
/// - 会員の貸出リストの末尾に追加する
///
/// 副作用なし。更新後の書籍・会員とイベントを返す。
pub fn issue_book(
    book: &Book,
    member: &Member,
    issued_at: DateTime<Utc>,
    staff_id: StaffId,
    policy: &LoanPolicy,
) -> Result<(Book, Member, BookIssued), IssueBookError> {
    if !book.is_available() {
        return Err(IssueBookError::AlreadyOnLoan);
    }

    let due_date = policy
        .due_date_for(issued_at)
        .ok_or(IssueBookError::DueDateOutOfRange)?;
    let new_book = book.clone().lent_to(member.member_id, due_date);

    let mut new_member = member.clone();
    new_member.add_borrowed(book.book_id);

    let event = BookIssued {
        book_id: book.book_id,
        member_id: member.member_id,
        issued_at,
        due_date,
        issued_by: staff_id,
    };

    Ok((new_book, new_member, event))
}

/// 純粋関数：書籍を返却する
///
/// ビジネスルール：
/// - 会員の貸出リストに含まれる書籍のみ返却できる
/// - 延滞していても返却は受け付ける
/// - 貸出リストからは最初に一致した1件だけを取り除く
///
/// 副作用なし。更新後の書籍・会員とイベントを返す。
pub fn return_book(
    book: &Book,
    member: &Member,
    returned_at: DateTime<Utc>,
) -> Result<(Book, Member, BookReturned), ReturnBookError> {
    let mut new_member = member.clone();
    if new_member.remove_borrowed(book.book_id).is_none() {
        return Err(ReturnBookError::NotBorrowedByMember);
    }

    let was_overdue = is_overdue(book, returned_at);
    let new_book = book.clone().released();

    let event = BookReturned {
        book_id: book.book_id,
        member_id: member.member_id,
        returned_at,
        was_overdue,
    };

    Ok((new_book, new_member, event))
}

/// 純粋関数：延滞判定
pub fn is_overdue(book: &Book, now: DateTime<Utc>) -> bool {
    book.due_date().is_some_and(|due_date| now > due_date)
}

/// 延滞日数（端数切り捨て）
pub fn overdue_days(due_date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - due_date).num_days()
}

/// 純粋関数：延滞料金を計算する
///
/// `borrowed`は会員の貸出リスト順に解決済みの書籍。
/// `now > due_date`の書籍だけが明細に載る。1日未満の延滞は0日・0円の明細になる。
pub fn calc_fines(borrowed: &[Book], now: DateTime<Utc>, policy: &LoanPolicy) -> Vec<FineLine> {
    borrowed
        .iter()
        .filter_map(|book| {
            let due_date = book.due_date()?;
            if now <= due_date {
                return None;
            }
            let days = overdue_days(due_date, now);
            Some(FineLine {
                book_id: book.book_id,
                overdue_days: days,
                amount: days as f64 * policy.fine_per_day,
            })
        })
        .collect()
}

/// イベント列から貸出中の書籍IDを復元する
///
/// 貸出イベントで末尾に追加し、返却イベントで最初に一致した1件を取り除く。
pub fn replay_issued_books(events: &[DomainEvent]) -> Vec<BookId> {
    events.iter().fold(Vec::new(), |mut issued, event| {
        match event {
            DomainEvent::BookIssued(e) => issued.push(e.book_id),
            DomainEvent::BookReturned(e) => {
                if let Some(index) = issued.iter().position(|id| *id == e.book_id) {
                    issued.remove(index);
                }
            }
        }
        issued
    })
}
