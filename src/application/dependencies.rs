use crate::domain::loan::LoanPolicy;
use crate::ports::*;
use std::sync::{Arc, Mutex, MutexGuard};

use super::errors::{ApplicationError, Result};

/// サービスの依存関係
///
/// 振る舞いは持たず、各ユースケース関数に引数として渡される。
/// `loan_lock`は貸出と返却の間で保持され、貸出可否の確認と状態の更新を
/// 1つの不可分な操作にする（カタログ全体で1つのロック）。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub catalog: Arc<dyn Catalog>,
    pub members: Arc<dyn MemberDirectory>,
    pub event_log: Arc<dyn EventLog>,
    pub policy: LoanPolicy,
    loan_lock: Arc<Mutex<()>>,
}

impl ServiceDependencies {
    pub fn new(
        catalog: Arc<dyn Catalog>,
        members: Arc<dyn MemberDirectory>,
        event_log: Arc<dyn EventLog>,
        policy: LoanPolicy,
    ) -> Self {
        Self {
            catalog,
            members,
            event_log,
            policy,
            loan_lock: Arc::new(Mutex::new(())),
        }
    }

    pub(crate) fn lock_loans(&self) -> Result<MutexGuard<'_, ()>> {
        self.loan_lock
            .lock()
            .map_err(|_| ApplicationError::LoanLockPoisoned)
    }
}
