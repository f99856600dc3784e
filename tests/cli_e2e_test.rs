use chrono::Duration;
use rusty_library_catalog::application::member::{find_member, list_borrowed};
use rusty_library_catalog::cli::{self, Session};
use rusty_library_catalog::domain::{BookId, MemberId};
use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

mod common;

use common::{librarian, seeded_deps, t0};

// ============================================================================
// E2Eテスト用のヘルパー関数
// ============================================================================

/// 入力スクリプトでメニューループを実行し、画面出力を返す
fn run_script(session: &mut Session, script: &[&str]) -> String {
    let mut input = script.join("\n");
    input.push('\n');

    let mut output = Vec::new();
    cli::run(session, Cursor::new(input), &mut output).expect("menu loop failed");
    String::from_utf8(output).expect("output is not UTF-8")
}

/// 基準時刻からの経過秒数を外から進められる時計付きのセッション
fn session_with_clock() -> (Session, Arc<AtomicI64>) {
    let offset = Arc::new(AtomicI64::new(0));
    let clock_offset = Arc::clone(&offset);
    let session = Session::new(seeded_deps(), librarian())
        .with_clock(move || t0() + Duration::seconds(clock_offset.load(Ordering::SeqCst)));
    (session, offset)
}

const ADD_MEMBER_100: [&str; 5] = ["1", "100", "Jane Doe", "1 Main St", "jane@example.com"];

// ============================================================================
// E2Eテスト: 正常系フロー
// ============================================================================

#[test]
fn test_e2e_full_loan_flow() {
    let mut session = Session::new(seeded_deps(), librarian());

    let mut script = ADD_MEMBER_100.to_vec();
    script.extend(["2", "Science Fiction", "1"]);
    script.extend(["4"]);
    script.extend(["3", "1"]);
    script.extend(["4"]);
    script.extend(["6"]);

    let output = run_script(&mut session, &script);

    assert!(output.starts_with(" Library Management System \n1. Add Member\n"));
    assert!(output.contains("Enter Member ID: Enter Name: Enter Address: Enter Email: "));
    assert!(output.contains("Member 100 added to the library system."));
    assert!(output.contains("Available Genres:\nGenre: Science Fiction\nGenre: Satire\n"));
    assert!(output.contains("Books available in the selected genre:\nBook ID: 1, Name: Science Fiction\n"));
    assert!(output.contains("Book borrowed successfully!"));
    assert!(output.contains("Books borrowed by Member 100:\nBook ID: 1, Name: Science Fiction\nDue Date: "));
    assert!(output.contains("Book returned successfully!\nRemaining books to return:\n"));
    assert!(output.contains("No books borrowed by the member."));
    assert!(output.ends_with("Exiting Library Management System. Goodbye!\n"));

    assert_eq!(session.current_member(), Some(MemberId::new(100)));
    assert!(
        list_borrowed(session.deps(), MemberId::new(100))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_e2e_display_shows_due_date() {
    let (mut session, _) = session_with_clock();

    let mut script = ADD_MEMBER_100.to_vec();
    script.extend(["2", "Romance", "5", "4", "6"]);

    let output = run_script(&mut session, &script);

    assert!(output.contains(
        "Books borrowed by Member 100:\nBook ID: 5, Name: Romance\nDue Date: Fri Mar  1 09:00:00 2024\n"
    ));
}

#[test]
fn test_e2e_fines_follow_the_clock() {
    let (mut session, offset) = session_with_clock();

    let mut script = ADD_MEMBER_100.to_vec();
    script.extend(["2", "Romance", "5", "6"]);
    run_script(&mut session, &script);

    // 10秒後: 延滞0日でも明細に載る
    offset.store(10, Ordering::SeqCst);
    let output = run_script(&mut session, &["5", "6"]);
    assert!(output.contains("Fine for Book ID 5: $0\n"));

    // 25時間後: 1日分
    offset.store(90_000, Ordering::SeqCst);
    let output = run_script(&mut session, &["5", "6"]);
    assert!(output.contains("Fine for Book ID 5: $1\n"));
}

#[test]
fn test_e2e_no_fine_line_before_due_date_passes() {
    let (mut session, _) = session_with_clock();

    let mut script = ADD_MEMBER_100.to_vec();
    script.extend(["2", "Romance", "5", "5", "6"]);

    let output = run_script(&mut session, &script);

    // 時計が止まっているので now == due_date（延滞ではない）
    assert!(!output.contains("Fine for Book ID"));
}

// ============================================================================
// E2Eテスト: 異常系フロー
// ============================================================================

#[test]
fn test_e2e_operations_without_member() {
    let mut session = Session::new(seeded_deps(), librarian());

    let output = run_script(&mut session, &["2", "3", "4", "5", "6"]);

    assert_eq!(
        output
            .matches("No member selected. Please add a member first.")
            .count(),
        4
    );
}

#[test]
fn test_e2e_invalid_choice_and_end_of_input() {
    let mut session = Session::new(seeded_deps(), librarian());

    let output = run_script(&mut session, &["9", "abc"]);

    assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
    assert!(!output.contains("Goodbye!"));
}

#[test]
fn test_e2e_invalid_member_id() {
    let mut session = Session::new(seeded_deps(), librarian());

    let output = run_script(&mut session, &["1", "not-a-number", "6"]);

    assert!(output.contains("Invalid Member ID."));
    assert_eq!(session.current_member(), None);
}

#[test]
fn test_e2e_issue_unknown_genre() {
    let mut session = Session::new(seeded_deps(), librarian());

    let mut script = ADD_MEMBER_100.to_vec();
    script.extend(["2", "Cookbooks", "6"]);

    let output = run_script(&mut session, &script);

    assert!(output.contains("No books available in the selected genre."));
}

#[test]
fn test_e2e_issue_book_outside_offered_set() {
    let mut session = Session::new(seeded_deps(), librarian());

    let mut script = ADD_MEMBER_100.to_vec();
    // Drama の候補は 3 のみ
    script.extend(["2", "Drama", "4", "2", "Drama", "x", "6"]);

    let output = run_script(&mut session, &script);

    assert_eq!(output.matches("Invalid Book ID. Book not found.").count(), 2);
    assert!(!output.contains("Book borrowed successfully!"));
    assert!(
        find_member(session.deps(), MemberId::new(100))
            .unwrap()
            .borrowed_books()
            .is_empty()
    );
}

#[test]
fn test_e2e_genre_unavailable_after_issue() {
    let mut session = Session::new(seeded_deps(), librarian());

    let mut script = ADD_MEMBER_100.to_vec();
    script.extend(["2", "Romance", "5", "2", "Romance", "6"]);

    let output = run_script(&mut session, &script);

    assert!(output.contains("Book borrowed successfully!"));
    assert!(output.contains("No books available in the selected genre."));
}

#[test]
fn test_e2e_return_book_not_borrowed() {
    let mut session = Session::new(seeded_deps(), librarian());

    let mut script = ADD_MEMBER_100.to_vec();
    script.extend(["2", "Romance", "5", "3", "7", "6"]);

    let output = run_script(&mut session, &script);

    assert!(output.contains("Invalid Book ID. Book not borrowed by the member."));
    assert_eq!(
        find_member(session.deps(), MemberId::new(100))
            .unwrap()
            .borrowed_books(),
        &[BookId::new(5)]
    );
}

#[test]
fn test_e2e_switching_members_keeps_each_members_loans() {
    let mut session = Session::new(seeded_deps(), librarian());

    let mut script = ADD_MEMBER_100.to_vec();
    script.extend(["2", "Romance", "5"]);
    script.extend(["1", "200", "John Roe", "2 Side St", "john@example.com"]);
    script.extend(["2", "Horror", "7", "4", "6"]);

    let output = run_script(&mut session, &script);

    assert!(output.contains("Books borrowed by Member 200:\nBook ID: 7, Name: Horror\n"));
    assert_eq!(session.current_member(), Some(MemberId::new(200)));
    assert_eq!(
        list_borrowed(session.deps(), MemberId::new(100))
            .unwrap()
            .iter()
            .map(|b| b.book_id)
            .collect::<Vec<_>>(),
        vec![BookId::new(5)]
    );
}

#[test]
fn test_e2e_invalid_utf8_input_keeps_session_alive() {
    let mut session = Session::new(seeded_deps(), librarian());
    let input = b"1\n100\n\xff\xfe\n1 Main St\njane@example.com\n2\nRomance\n5\n6\n".to_vec();

    let mut output = Vec::new();
    cli::run(&mut session, Cursor::new(input), &mut output).expect("menu loop failed");
    let output = String::from_utf8(output).expect("output is not UTF-8");

    assert!(output.contains("Member 100 added to the library system."));
    assert!(output.contains("Book borrowed successfully!"));
    assert!(output.ends_with("Exiting Library Management System. Goodbye!\n"));
    assert_eq!(
        find_member(session.deps(), MemberId::new(100))
            .unwrap()
            .contact
            .name,
        "\u{FFFD}\u{FFFD}"
    );
}
