use std::borrow::Cow;

/// Market code, e.g. `EN.LIS` - mostly static
pub type MarketCode = Cow<'static, str>;
