pub mod format;
pub mod render;

pub use format::{SENTINEL, format_hour_12h, format_timestamp};
pub use render::{Summary, render_summary};
