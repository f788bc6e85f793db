//! Stock identity: reconciling names with ISIN codes.

mod isin_cache;


pub use isin_cache::{shorthand, IsinCache, Observation};
