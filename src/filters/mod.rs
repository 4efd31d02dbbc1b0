pub mod year;

pub use year::{YearSelection, filter_by_year};
