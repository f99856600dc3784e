pub mod catalog;
pub mod dependencies;
pub mod errors;
pub mod loan;
pub mod member;

pub use dependencies::ServiceDependencies;
pub use errors::{ApplicationError, Result};
