mod bookkeeping;
mod fine_calculation;
mod loan_service;

pub use bookkeeping::issued_books;
pub use fine_calculation::calc_fine;
pub use loan_service::{issue_book, return_book};
