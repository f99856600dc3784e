#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rusty_library_catalog::adapters::memory::{Catalog, EventLog, MemberDirectory};
use rusty_library_catalog::application::ServiceDependencies;
use rusty_library_catalog::application::member::register_member;
use rusty_library_catalog::domain::commands::RegisterMember;
use rusty_library_catalog::domain::loan::LoanPolicy;
use rusty_library_catalog::domain::{ContactInfo, Librarian, MemberId, StaffId};
use std::sync::Arc;

/// 初期蔵書17冊・空の会員名簿・空のイベントログで依存関係を組み立てる
pub fn seeded_deps() -> ServiceDependencies {
    seeded_deps_with(LoanPolicy::default())
}

pub fn seeded_deps_with(policy: LoanPolicy) -> ServiceDependencies {
    ServiceDependencies::new(
        Arc::new(Catalog::seeded()),
        Arc::new(MemberDirectory::new()),
        Arc::new(EventLog::new()),
        policy,
    )
}

/// テスト用の会員を登録する
pub fn add_member(deps: &ServiceDependencies, id: u32) -> MemberId {
    let member = register_member(
        deps,
        RegisterMember {
            member_id: MemberId::new(id),
            contact: ContactInfo::new(
                format!("Member {}", id),
                "1 Main St",
                format!("member{}@example.com", id),
            ),
        },
    )
    .expect("Failed to register member");
    member.member_id
}

pub fn librarian() -> Librarian {
    Librarian::new(
        StaffId::new(1),
        ContactInfo::new("John Thomas", "13 West St", "johnthomash12@gmail.com"),
        50000,
    )
}

/// 固定の基準時刻
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}
