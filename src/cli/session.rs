use chrono::{DateTime, Utc};

use crate::application::ServiceDependencies;
use crate::domain::{Librarian, MemberId};

/// 現在時刻の取得元
pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// 対話セッションの状態
///
/// 会員名簿は任意の人数を保持できるが、メニューは「現在の会員」1人に対して操作する。
/// 会員を追加するとその会員が現在の会員になる。
pub struct Session {
    deps: ServiceDependencies,
    librarian: Librarian,
    current_member: Option<MemberId>,
    clock: Clock,
}

impl Session {
    pub fn new(deps: ServiceDependencies, librarian: Librarian) -> Self {
        Self {
            deps,
            librarian,
            current_member: None,
            clock: Box::new(Utc::now),
        }
    }

    /// 時刻の取得元を差し替える
    pub fn with_clock(self, clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) -> Self {
        Self {
            clock: Box::new(clock),
            ..self
        }
    }

    pub fn deps(&self) -> &ServiceDependencies {
        &self.deps
    }

    pub fn librarian(&self) -> &Librarian {
        &self.librarian
    }

    pub fn current_member(&self) -> Option<MemberId> {
        self.current_member
    }

    pub fn select_member(&mut self, member_id: MemberId) {
        self.current_member = Some(member_id);
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }
}
