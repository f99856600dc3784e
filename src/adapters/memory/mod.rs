pub mod catalog;
pub mod event_log;
pub mod member_directory;
pub mod seed;

pub use catalog::Catalog;
pub use event_log::EventLog;
pub use member_directory::MemberDirectory;
pub use seed::seed_books;
