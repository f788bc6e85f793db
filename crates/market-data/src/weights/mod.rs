//! Stock index weights and name references.

mod stock_refs;
mod stock_weight;

#[cfg(test)]
mod weights_tests;

pub use stock_refs::{comp_name_ok, RefIsin, RefsStatus, StockRefs};
pub use stock_weight::{StockWeight, Weight, WeightTotal, UNKNOWN_WEIGHT};
