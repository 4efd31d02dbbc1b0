pub mod environment;
pub mod paths;
pub mod time;

pub use environment::{current_utc_year, init_logging};
pub use paths::{read_export_file, validate_file_size};
pub use time::{utc_date, utc_datetime};
