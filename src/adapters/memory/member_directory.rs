use crate::domain::{Member, MemberId};
use crate::ports::member_directory::{MemberDirectory as MemberDirectoryTrait, Result};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

/// MemberDirectoryのインメモリ実装
pub struct MemberDirectory {
    members: Mutex<BTreeMap<MemberId, Member>>,
}

impl MemberDirectory {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(BTreeMap::new()),
        }
    }

    fn members(&self) -> Result<MutexGuard<'_, BTreeMap<MemberId, Member>>> {
        Ok(self.members.lock().map_err(|_| "member directory lock poisoned")?)
    }
}

impl Default for MemberDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberDirectoryTrait for MemberDirectory {
    fn register(&self, member: Member) -> Result<Member> {
        let mut members = self.members()?;
        let registered = match members.get_mut(&member.member_id) {
            Some(existing) => {
                existing.contact = member.contact;
                existing.clone()
            }
            None => {
                members.insert(member.member_id, member.clone());
                member
            }
        };
        Ok(registered)
    }

    fn find_by_id(&self, member_id: MemberId) -> Result<Option<Member>> {
        Ok(self.members()?.get(&member_id).cloned())
    }

    fn save(&self, member: Member) -> Result<()> {
        let mut members = self.members()?;
        let slot = members
            .get_mut(&member.member_id)
            .ok_or_else(|| format!("member {} is not registered", member.member_id))?;
        *slot = member;
        Ok(())
    }

    fn list_member_ids(&self) -> Result<Vec<MemberId>> {
        Ok(self.members()?.keys().copied().collect())
    }
}
