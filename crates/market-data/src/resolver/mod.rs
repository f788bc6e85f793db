//! Stock resolution: market tables and the ISIN-keyed stock database.

mod market_map;
mod stock_db;


pub use market_map::{market_to_varname, varname_to_market, MarketMap, UNKNOWN_MARKET};
pub use stock_db::StockDb;
