use serde::{Deserialize, Serialize};

use super::{ContactInfo, StaffId};

/// 図書館職員
///
/// 貸出処理の実行者。カタログそのものはポート経由で参照する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Librarian {
    staff_id: StaffId,
    pub contact: ContactInfo,
    salary: u32,
}

impl Librarian {
    pub fn new(staff_id: StaffId, contact: ContactInfo, salary: u32) -> Self {
        Self {
            staff_id,
            contact,
            salary,
        }
    }

    pub fn staff_id(&self) -> StaffId {
        self.staff_id
    }

    pub fn set_staff_id(&mut self, staff_id: StaffId) {
        self.staff_id = staff_id;
    }

    pub fn salary(&self) -> u32 {
        self.salary
    }

    pub fn set_salary(&mut self, salary: u32) {
        self.salary = salary;
    }
}
