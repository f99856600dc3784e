use chrono::{DateTime, Utc};

use crate::domain::{Book, loan::FineLine};

/// 返却期限の表示形式（例: `Fri Mar  1 09:00:00 2024`）
const DUE_DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub fn book_line(book: &Book) -> String {
    format!("Book ID: {}, Name: {}", book.book_id, book.title)
}

pub fn format_due_date(due_date: DateTime<Utc>) -> String {
    due_date.format(DUE_DATE_FORMAT).to_string()
}

pub fn due_date_line(book: &Book) -> String {
    match book.due_date() {
        Some(due_date) => format!("Due Date: {}", format_due_date(due_date)),
        None => "Due Date: no due date".to_string(),
    }
}

/// 金額は整数なら小数点なしで表示する（`$0`, `$1`, `$1.5`）
pub fn fine_line(line: &FineLine) -> String {
    format!("Fine for Book ID {}: ${}", line.book_id, line.amount)
}
