pub mod name_filter;
pub mod prize_value;

pub use name_filter::{escape_regex, exact_name};
pub use prize_value::{parse_prize_value, INVALID_PRIZE_VALUE};
