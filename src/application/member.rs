use crate::domain::{Book, Member, MemberId, commands::RegisterMember};

use super::catalog::resolve_books;
use super::dependencies::ServiceDependencies;
use super::errors::{ApplicationError, Result};

/// 会員を登録する
///
/// 同じIDの会員が既にいる場合は連絡先を上書きする。借りている書籍は引き継がれる。
pub fn register_member(deps: &ServiceDependencies, cmd: RegisterMember) -> Result<Member> {
    let member = deps
        .members
        .register(Member::new(cmd.member_id, cmd.contact))
        .map_err(ApplicationError::MemberDirectoryError)?;

    tracing::info!(member_id = %member.member_id, "member registered");
    Ok(member)
}

/// IDで会員を取得する
pub fn find_member(deps: &ServiceDependencies, member_id: MemberId) -> Result<Member> {
    deps.members
        .find_by_id(member_id)
        .map_err(ApplicationError::MemberDirectoryError)?
        .ok_or(ApplicationError::MemberNotFound)
}

/// 登録済み会員のIDを昇順で返す
pub fn list_member_ids(deps: &ServiceDependencies) -> Result<Vec<MemberId>> {
    deps.members
        .list_member_ids()
        .map_err(ApplicationError::MemberDirectoryError)
}

/// 会員が借りている書籍を貸出順に返す
pub fn list_borrowed(deps: &ServiceDependencies, member_id: MemberId) -> Result<Vec<Book>> {
    let member = find_member(deps, member_id)?;
    resolve_books(deps, member.borrowed_books())
}
