//! Netstocked Market Data Crate
//!
//! Reference data for listed equities: ISIN validation, per-market stock
//! lists with ISIN resolution, and stock index compositions.
//!
//! # Overview
//!
//! - [`isin`] - ISO 6166 check digit computation and validation
//! - [`StockDb`] - market code to stock list, ISIN to (symbol, name)
//! - [`StockWeight`] - one stock index: abbreviation, full name, weight
//! - [`StockRefs`] / [`RefIsin`] - cross references between indexes and ISINs
//! - [`MarketMap`] - Euronext market codes and names
//!
//! All types are plain in-memory structures; loading the source files is
//! left to the caller.

pub mod errors;
pub mod isin;
pub mod models;
pub mod resolver;
pub mod weights;

pub use errors::{MarketDataError, Result};
pub use isin::Isin;
pub use models::{MarketCode, StockIdentity, StockRecord, NO_SYMBOL};
pub use resolver::{
    market_to_varname, varname_to_market, MarketMap, StockDb, UNKNOWN_MARKET,
};
pub use weights::{
    comp_name_ok, RefIsin, RefsStatus, StockRefs, StockWeight, Weight, WeightTotal,
    UNKNOWN_WEIGHT,
};
