use chrono::{DateTime, Utc};

use crate::application::catalog::resolve_books;
use crate::application::dependencies::ServiceDependencies;
use crate::application::errors::Result;
use crate::application::member::find_member;
use crate::domain::{self, MemberId, loan::FineLine};

/// 会員の延滞料金を計算する
///
/// 貸出リスト順に、`now`が返却期限を過ぎている書籍だけを明細として返す。
/// 料金は計算するだけで、保存も請求もしない。
pub fn calc_fine(
    deps: &ServiceDependencies,
    member_id: MemberId,
    now: DateTime<Utc>,
) -> Result<Vec<FineLine>> {
    let member = find_member(deps, member_id)?;
    let borrowed = resolve_books(deps, member.borrowed_books())?;

    let fines = domain::loan::calc_fines(&borrowed, now, &deps.policy);

    tracing::debug!(member_id = %member_id, lines = fines.len(), "fines calculated");
    Ok(fines)
}
