use std::io::{self, BufRead, Write};

use crate::application::{
    ApplicationError,
    catalog::{list_genres, offer_books_in_genre, select_offered_book},
    loan::{
        calc_fine as execute_calc_fine, issue_book as execute_issue_book,
        return_book as execute_return_book,
    },
    member::{list_borrowed, register_member},
};
use crate::domain::{
    BookId, ContactInfo, MemberId,
    commands::{IssueBook, RegisterMember, ReturnBook},
};

use super::display::{book_line, due_date_line, fine_line};
use super::error::CliError;
use super::menu::MenuChoice;
use super::session::Session;
use super::terminal::Terminal;

/// メニューの選択肢に対応する処理を実行する
///
/// 業務エラーはメッセージを表示して正常終了する。`Err`は端末の入出力エラーのみ。
pub fn dispatch<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
    choice: MenuChoice,
) -> io::Result<()> {
    match choice {
        MenuChoice::AddMember => add_member(session, term),
        MenuChoice::IssueBook => issue_book(session, term),
        MenuChoice::ReturnBook => return_book(session, term),
        MenuChoice::DisplayBorrowedBooks => display_borrowed_books(session, term),
        MenuChoice::CalculateFine => calc_fine(session, term),
        MenuChoice::Exit => Ok(()),
    }
}

/// 1. 会員の追加
///
/// 登録した会員が現在の会員になる。
pub fn add_member<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> io::Result<()> {
    let Some(raw_id) = term.prompt("Enter Member ID: ")? else {
        return Ok(());
    };
    let Ok(member_id) = raw_id.parse::<u32>().map(MemberId::new) else {
        return term.say("Invalid Member ID.");
    };
    let Some(name) = term.prompt("Enter Name: ")? else {
        return Ok(());
    };
    let Some(address) = term.prompt("Enter Address: ")? else {
        return Ok(());
    };
    let Some(email) = term.prompt("Enter Email: ")? else {
        return Ok(());
    };

    let cmd = RegisterMember {
        member_id,
        contact: ContactInfo::new(name, address, email),
    };

    match register_member(session.deps(), cmd) {
        Ok(member) => {
            session.select_member(member.member_id);
            term.say(format!(
                "Member {} added to the library system.",
                member.member_id
            ))
        }
        Err(err) => report(term, err),
    }
}

/// 2. 書籍の貸出
///
/// ジャンル一覧 → ジャンル選択 → 貸出可能な書籍一覧 → 書籍ID選択 → 貸出。
pub fn issue_book<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> io::Result<()> {
    let Some(member_id) = require_member(session, term)? else {
        return Ok(());
    };

    let genres = match list_genres(session.deps()) {
        Ok(genres) => genres,
        Err(err) => return report(term, err),
    };
    term.say("Available Genres:")?;
    for genre in &genres {
        term.say(format!("Genre: {}", genre))?;
    }

    let Some(genre) = term.prompt("Enter the Genre you want to borrow: ")? else {
        return Ok(());
    };
    let offered = match offer_books_in_genre(session.deps(), &genre) {
        Ok(books) => books,
        Err(err) => return report(term, err),
    };

    term.say("Books available in the selected genre:")?;
    for book in &offered {
        term.say(book_line(book))?;
    }

    let Some(raw_id) = term.prompt("Enter the Book ID you want to borrow: ")? else {
        return Ok(());
    };

    let result = parse_book_id(&raw_id)
        .ok_or(ApplicationError::BookNotFound)
        .and_then(|book_id| select_offered_book(&offered, book_id).map(|b| b.book_id))
        .and_then(|book_id| {
            execute_issue_book(
                session.deps(),
                IssueBook {
                    book_id,
                    member_id,
                    issued_at: session.now(),
                    staff_id: session.librarian().staff_id(),
                },
            )
        });

    match result {
        Ok(_) => term.say("Book borrowed successfully!"),
        Err(err) => report(term, err),
    }
}

/// 3. 書籍の返却
pub fn return_book<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> io::Result<()> {
    let Some(member_id) = require_member(session, term)? else {
        return Ok(());
    };

    let borrowed = match list_borrowed(session.deps(), member_id) {
        Ok(books) => books,
        Err(err) => return report(term, err),
    };

    term.say(format!("Books borrowed by Member {}:", member_id))?;
    for book in &borrowed {
        term.say(book_line(book))?;
    }
    if borrowed.is_empty() {
        return term.say("No books borrowed by the member.");
    }

    let Some(raw_id) = term.prompt("Enter the Book ID you want to return: ")? else {
        return Ok(());
    };

    let result = parse_book_id(&raw_id)
        .ok_or(ApplicationError::NotBorrowedByMember)
        .and_then(|book_id| {
            execute_return_book(
                session.deps(),
                ReturnBook {
                    book_id,
                    member_id,
                    returned_at: session.now(),
                },
            )
        });

    if let Err(err) = result {
        return report(term, err);
    }
    term.say("Book returned successfully!")?;

    let remaining = match list_borrowed(session.deps(), member_id) {
        Ok(books) => books,
        Err(err) => return report(term, err),
    };
    term.say("Remaining books to return:")?;
    for book in &remaining {
        term.say(book_line(book))?;
    }
    Ok(())
}

/// 4. 借りている書籍の表示
pub fn display_borrowed_books<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> io::Result<()> {
    let Some(member_id) = require_member(session, term)? else {
        return Ok(());
    };

    let borrowed = match list_borrowed(session.deps(), member_id) {
        Ok(books) => books,
        Err(err) => return report(term, err),
    };
    if borrowed.is_empty() {
        return term.say("No books borrowed by the member.");
    }

    term.say(format!("Books borrowed by Member {}:", member_id))?;
    for book in &borrowed {
        term.say(book_line(book))?;
        term.say(due_date_line(book))?;
    }
    Ok(())
}

/// 5. 延滞料金の計算
pub fn calc_fine<R: BufRead, W: Write>(
    session: &mut Session,
    term: &mut Terminal<R, W>,
) -> io::Result<()> {
    let Some(member_id) = require_member(session, term)? else {
        return Ok(());
    };

    match execute_calc_fine(session.deps(), member_id, session.now()) {
        Ok(fines) => {
            for line in &fines {
                term.say(fine_line(line))?;
            }
            Ok(())
        }
        Err(err) => report(term, err),
    }
}

fn require_member<R: BufRead, W: Write>(
    session: &Session,
    term: &mut Terminal<R, W>,
) -> io::Result<Option<MemberId>> {
    match session.current_member() {
        Some(member_id) => Ok(Some(member_id)),
        None => {
            term.say("No member selected. Please add a member first.")?;
            Ok(None)
        }
    }
}

fn parse_book_id(raw: &str) -> Option<BookId> {
    raw.parse::<u32>().ok().map(BookId::new)
}

fn report<R: BufRead, W: Write>(term: &mut Terminal<R, W>, err: ApplicationError) -> io::Result<()> {
    term.say(CliError::from(err).user_message())
}
