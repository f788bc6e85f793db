//! Market code to market name mappings.
//!
//! Euronext publishes its equity list with a full market name per row
//! ("Euronext Lisbon"); reference data is keyed by the short code
//! (`EN.LIS`). This table converts between the two.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::models::MarketCode;

/// Returned by [`MarketMap::short_name`] for unmapped market names.
pub const UNKNOWN_MARKET: &str = "?";

/// Market code to full market name database.
pub struct MarketMap {
    names: HashMap<MarketCode, Cow<'static, str>>,
}

impl Default for MarketMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketMap {
    /// Create a new MarketMap with the default Euronext markets.
    pub fn new() -> Self {
        let mut map = Self {
            names: HashMap::new(),
        };
        map.load_defaults();
        map
    }

    fn load_defaults(&mut self) {
        // ===== Euronext Access =====
        self.add("BRU.A", "Euronext Access Brussels");
        self.add("LIS.A", "Euronext Access Lisbon");
        self.add("PAR.A", "Euronext Access Paris");

        // ===== Euronext regulated =====
        self.add("AMS.A", "Euronext Amsterdam");
        self.add("EN.AB", "Euronext Amsterdam, Brussels");
        self.add("EN.ABP", "Euronext Amsterdam, Brussels, Paris");
        self.add("EN.AP", "Euronext Amsterdam, Paris");
        self.add("EN.B", "Euronext Brussels");
        self.add("EN.BA", "Euronext Brussels, Amsterdam");
        self.add("EN.BP", "Euronext Brussels, Paris");
        self.add("EN.DUBLIN", "Euronext Dublin");
        self.add("EN.LIS", "Euronext Lisbon");
        self.add("EN.PAR", "Euronext Paris");
        self.add("EN.PA", "Euronext Paris, Amsterdam");
        self.add("EN.PAB", "Euronext Paris, Amsterdam, Brussels");
        self.add("EN.PB", "Euronext Paris, Brussels");

        // ===== Expand / Expert =====
        self.add("EX.OSLO", "Euronext Expand Oslo");
        self.add("EN.EXP", "Euronext Expert Market");

        // ===== Euronext Growth =====
        self.add("EG.BRU", "Euronext Growth Brussels");
        self.add("EG.DUBLIN", "Euronext Growth Dublin");
        self.add("EG.LIS", "Euronext Growth Lisbon");
        self.add("EG.OSLO", "Euronext Growth Oslo");
        self.add("EG.PAR", "Euronext Growth Paris");
        self.add("EG.PB", "Euronext Growth Paris, Brussels");

        // ===== Other =====
        self.add("OSLO", "Oslo B.rs");
        self.add("NLB", "Traded not listed Brussels");
    }

    fn add(&mut self, code: &'static str, name: &'static str) {
        self.names.insert(Cow::Borrowed(code), Cow::Borrowed(name));
    }

    /// Full market name for a code.
    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(|n| n.as_ref())
    }

    /// Short code for a full market name, or [`UNKNOWN_MARKET`].
    pub fn short_name(&self, market_name: &str) -> &str {
        self.names
            .iter()
            .find(|(_, name)| name.as_ref() == market_name)
            .map(|(code, _)| code.as_ref())
            .unwrap_or(UNKNOWN_MARKET)
    }

    /// All market codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.names.keys().map(|c| c.as_ref()).collect();
        codes.sort_unstable();
        codes
    }
}

/// Identifier-safe form of a market code: `EN.LIS` becomes `EN_LIS`.
pub fn market_to_varname(code: &str) -> String {
    code.replace('.', "_")
}

/// Inverse of [`market_to_varname`].
pub fn varname_to_market(name: &str) -> String {
    name.replace('_', ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup() {
        let map = MarketMap::new();
        assert_eq!(map.name("EN.LIS"), Some("Euronext Lisbon"));
        assert_eq!(map.name("XNYS"), None);
    }

    #[test]
    fn test_short_name() {
        let map = MarketMap::new();
        assert_eq!(map.short_name("Euronext Growth Paris, Brussels"), "EG.PB");
        assert_eq!(map.short_name("Nasdaq"), UNKNOWN_MARKET);
    }

    #[test]
    fn test_codes_sorted() {
        let map = MarketMap::new();
        let codes = map.codes();
        assert_eq!(codes.len(), 26);
        assert_eq!(codes.first(), Some(&"AMS.A"));
    }

    #[test]
    fn test_varname_conversion() {
        assert_eq!(market_to_varname("EN.LIS"), "EN_LIS");
        assert_eq!(varname_to_market("EN_LIS"), "EN.LIS");
    }
}
