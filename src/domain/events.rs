use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookId, MemberId, StaffId};

/// イベント：書籍が貸し出された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookIssued {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub issued_at: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub issued_by: StaffId,
}

/// イベント：書籍が返却された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReturned {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub returned_at: DateTime<Utc>,
    pub was_overdue: bool,
}

/// ドメインイベント統合型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainEvent {
    BookIssued(BookIssued),
    BookReturned(BookReturned),
}

impl DomainEvent {
    /// イベント種別（イベントログの判別子）
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::BookIssued(_) => "BookIssued",
            DomainEvent::BookReturned(_) => "BookReturned",
        }
    }

    /// イベントの発生時刻
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            DomainEvent::BookIssued(e) => e.issued_at,
            DomainEvent::BookReturned(e) => e.returned_at,
        }
    }

    pub fn book_id(&self) -> BookId {
        match self {
            DomainEvent::BookIssued(e) => e.book_id,
            DomainEvent::BookReturned(e) => e.book_id,
        }
    }
}
