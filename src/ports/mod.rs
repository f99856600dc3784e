pub mod catalog;
pub mod event_log;
pub mod member_directory;

pub use catalog::Catalog;
pub use event_log::EventLog;
pub use member_directory::MemberDirectory;
