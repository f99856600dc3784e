use rusty_library_catalog::{
    adapters::memory::{
        catalog::Catalog as MemoryCatalog, event_log::EventLog as MemoryEventLog,
        member_directory::MemberDirectory as MemoryMemberDirectory,
    },
    application::{
        ServiceDependencies, catalog::all_books, loan::issued_books, member::list_member_ids,
    },
    cli::{self, Session},
    config::AppConfig,
};
use std::error::Error;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;

    // Initialize tracing (stderr so log lines stay out of the menu)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Initialize adapters
    let catalog = Arc::new(MemoryCatalog::seeded());
    let members = Arc::new(MemoryMemberDirectory::new());
    let event_log = Arc::new(MemoryEventLog::new());

    let deps = ServiceDependencies::new(catalog, members, event_log, config.loan_policy());
    let librarian = config.librarian.to_librarian();

    tracing::info!(
        staff_id = %librarian.staff_id(),
        books = all_books(&deps)?.len(),
        loan_period_days = config.loan.loan_period_days,
        fine_per_day = config.loan.fine_per_day,
        "library session started"
    );

    let mut session = Session::new(deps, librarian);
    cli::run(&mut session, io::stdin().lock(), io::stdout().lock())?;

    // Librarian's bookkeeping at the end of the session
    let issued = issued_books(session.deps())?;
    tracing::info!(
        members = list_member_ids(session.deps())?.len(),
        issued_books = ?issued.iter().map(|id| id.value()).collect::<Vec<_>>(),
        "library session ended"
    );

    Ok(())
}
