use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{BookId, ContactInfo, MemberId, StaffId};

/// コマンド：会員を登録する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterMember {
    pub member_id: MemberId,
    pub contact: ContactInfo,
}

/// コマンド：書籍を貸し出す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueBook {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub issued_at: DateTime<Utc>,
    pub staff_id: StaffId,
}

/// コマンド：書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub returned_at: DateTime<Utc>,
}
