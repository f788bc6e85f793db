//! Market data models
//!
//! - `types` - Type aliases for common identifiers (MarketCode)
//! - `stock` - Listed equity records (StockRecord) and ISIN resolutions (StockIdentity)

mod stock;
mod types;

pub use stock::{StockIdentity, StockRecord, NO_SYMBOL};
pub use types::MarketCode;
