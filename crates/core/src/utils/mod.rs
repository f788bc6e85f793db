pub mod money;
pub mod time_utils;

pub use money::{known_str, money_string};
pub use time_utils::{iso_date, parse_date};
