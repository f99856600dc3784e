use crate::domain::{self, Book, DomainEvent, Member, commands::*};

use crate::application::catalog::find_book;
use crate::application::dependencies::ServiceDependencies;
use crate::application::errors::{ApplicationError, Result};
use crate::application::member::find_member;

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - 書籍と会員が存在すること
/// - 書籍が貸出中でないこと（一覧表示から選択までの間に他の会員が借りた場合も弾く）
/// - 返却期限は貸出時刻 + 設定された貸出期間（既定は0日）
///
/// 確認から保存まで貸出ロックを保持する。失敗時は何も変更しない。
/// 帳簿への記録は貸出状態に影響しないため、記録に失敗しても貸出は成立する。
///
/// # 戻り値
/// 貸出後の書籍
pub fn issue_book(deps: &ServiceDependencies, cmd: IssueBook) -> Result<Book> {
    let _guard = deps.lock_loans()?;

    // 1. 書籍と会員の取得
    let book = find_book(deps, cmd.book_id)?;
    let member = find_member(deps, cmd.member_id)?;

    // 2. ドメイン層の純粋関数を呼び出し
    let (issued_book, updated_member, event) =
        domain::loan::issue_book(&book, &member, cmd.issued_at, cmd.staff_id, &deps.policy)
            .inspect_err(|err| {
                tracing::warn!(
                    book_id = %cmd.book_id,
                    member_id = %cmd.member_id,
                    error = ?err,
                    "issue rejected"
                );
            })?;

    // 3. 書籍と会員を保存
    save_loan_state(deps, &book, issued_book.clone(), updated_member)?;

    // 4. 帳簿に記録
    record(deps, DomainEvent::BookIssued(event.clone()));

    tracing::info!(
        book_id = %event.book_id,
        member_id = %event.member_id,
        due_date = %event.due_date,
        "book issued"
    );
    Ok(issued_book)
}

/// 書籍を返却する
///
/// ビジネスルール：
/// - 会員の貸出リストに書籍IDが含まれていること
/// - 延滞していても返却は受け付ける
/// - 貸出リストからは最初に一致した1件だけを取り除く
///
/// 確認から保存まで貸出ロックを保持する。失敗時は何も変更しない。
/// 帳簿への記録に失敗しても返却は成立する。
///
/// # 戻り値
/// 返却後の書籍（表示用）
pub fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> Result<Book> {
    let _guard = deps.lock_loans()?;

    // 1. 会員の取得と貸出確認
    let member = find_member(deps, cmd.member_id)?;
    if !member.holds(cmd.book_id) {
        tracing::warn!(
            book_id = %cmd.book_id,
            member_id = %cmd.member_id,
            "return rejected: book not borrowed by member"
        );
        return Err(ApplicationError::NotBorrowedByMember);
    }

    // 2. 書籍の取得
    let book = find_book(deps, cmd.book_id)?;

    // 3. ドメイン層の純粋関数を呼び出し
    let (returned_book, updated_member, event) =
        domain::loan::return_book(&book, &member, cmd.returned_at)?;

    // 4. 書籍と会員を保存
    save_loan_state(deps, &book, returned_book.clone(), updated_member)?;

    // 5. 帳簿に記録
    record(deps, DomainEvent::BookReturned(event.clone()));

    tracing::info!(
        book_id = %event.book_id,
        member_id = %event.member_id,
        was_overdue = event.was_overdue,
        "book returned"
    );
    Ok(returned_book)
}

/// 書籍を保存してから会員を保存する
///
/// 会員の保存に失敗した場合は書籍を`previous`に戻してからエラーを返す。
fn save_loan_state(
    deps: &ServiceDependencies,
    previous: &Book,
    book: Book,
    member: Member,
) -> Result<()> {
    deps.catalog
        .save(book)
        .map_err(ApplicationError::CatalogError)?;

    if let Err(err) = deps.members.save(member) {
        if let Err(rollback_err) = deps.catalog.save(previous.clone()) {
            tracing::error!(
                book_id = %previous.book_id,
                error = %rollback_err,
                "failed to restore book after member save failure"
            );
        }
        return Err(ApplicationError::MemberDirectoryError(err));
    }
    Ok(())
}

/// 帳簿にイベントを追記する。失敗はログに残すだけで呼び出し元には返さない
fn record(deps: &ServiceDependencies, event: DomainEvent) {
    let event_type = event.event_type();
    let book_id = event.book_id();
    if let Err(err) = deps.event_log.append(event) {
        tracing::error!(
            event_type,
            book_id = %book_id,
            error = %err,
            "failed to record event"
        );
    }
}
