use crate::application::dependencies::ServiceDependencies;
use crate::application::errors::{ApplicationError, Result};
use crate::domain::{self, BookId};

/// 職員の帳簿上で現在貸出中の書籍IDを返す
///
/// イベントログを先頭から再生して求める。貸出順で、返却された書籍は含まない。
pub fn issued_books(deps: &ServiceDependencies) -> Result<Vec<BookId>> {
    let events = deps
        .event_log
        .load_all()
        .map_err(ApplicationError::EventLogError)?;

    Ok(domain::loan::replay_issued_books(&events))
}
