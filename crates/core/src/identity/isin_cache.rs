//! Name to ISIN reconciliation cache.
//!
//! Brokerage exports spell stock names and fill in ISINs inconsistently.
//! The cache keeps the first name/ISIN pair it sees for each key and
//! reports later disagreements instead of overwriting: first write wins,
//! every conflict is logged for audit.

use std::collections::HashMap;

use log::warn;

/// Friendlier display names for a few well-known ISINs.
const FAST_ISIN: [(&str, &str); 2] = [
    ("NL0000009538", "PHILIPS"), // KON.PHILIPS N.V.
    ("DE0005200000", "BEIERSDORF"),
];

/// One `update` call, as observed: (isin, name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub isin: String,
    pub name: String,
}

/// Bidirectional name/ISIN registry.
///
/// Owned by the caller and passed by `&mut` wherever reconciliation
/// happens, so there is exactly one authoritative instance per run.
#[derive(Debug, Default)]
pub struct IsinCache {
    by_name: HashMap<String, String>,
    by_isin: HashMap<String, String>,
    log: Vec<Observation>,
    bogus: Vec<String>,
    last_error: String,
}

impl IsinCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles `name` with `isin` and returns the pair to use.
    ///
    /// - empty `name`: nothing to resolve, returns `(name, "")`
    /// - empty `isin`: lookup only, returns the cached ISIN for `name` or `""`
    /// - known `isin`: returns `(name, isin)`; a different recorded name is
    ///   a conflict
    /// - known `name` with another ISIN: the cached ISIN is returned and the
    ///   disagreement is a conflict
    /// - otherwise the pair is registered both ways
    pub fn update(&mut self, name: &str, isin: &str) -> (String, String) {
        self.log.push(Observation {
            isin: isin.to_string(),
            name: name.to_string(),
        });
        let resolved = self.resolve(name, isin);
        if !self.last_error.is_empty() {
            warn!("{}", self.last_error);
            self.bogus.push(self.last_error.clone());
        }
        resolved
    }

    fn resolve(&mut self, name: &str, isin: &str) -> (String, String) {
        self.last_error.clear();
        if name.is_empty() {
            return (String::new(), String::new());
        }
        if isin.is_empty() {
            let cached = self.by_name.get(name).cloned().unwrap_or_default();
            return (name.to_string(), cached);
        }
        if let Some(there) = self.by_isin.get(isin) {
            if there != name {
                self.last_error = format!("ISIN {} is not '{}', but {}", isin, name, there);
            }
            return (name.to_string(), isin.to_string());
        }
        if let Some(isin_there) = self.by_name.get(name) {
            let isin_there = isin_there.clone();
            if isin_there != isin {
                self.last_error = format!("ISIN for {} expected as '{}'", name, isin_there);
            }
            return (name.to_string(), isin_there);
        }
        self.by_name.insert(name.to_string(), isin.to_string());
        self.by_isin.insert(isin.to_string(), name.to_string());
        (name.to_string(), isin.to_string())
    }

    /// Conflict message of the most recent `update`, empty if none.
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Every conflict detected so far, oldest first.
    pub fn conflicts(&self) -> &[String] {
        &self.bogus
    }

    /// Every `update` call so far, oldest first.
    pub fn observations(&self) -> &[Observation] {
        &self.log
    }

    pub fn isin_for(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    pub fn name_for(&self, isin: &str) -> Option<&str> {
        self.by_isin.get(isin).map(String::as_str)
    }

    /// Registered (name, isin) pairs sorted by name.
    pub fn stock_names(&self) -> Vec<(&str, &str)> {
        let mut names: Vec<(&str, &str)> = self
            .by_name
            .iter()
            .map(|(name, isin)| (name.as_str(), isin.as_str()))
            .collect();
        names.sort_unstable();
        names
    }
}

/// Display name for a handful of well-known ISINs, or `""`.
///
/// Does not consult any cache.
pub fn shorthand(isin: &str) -> &'static str {
    FAST_ISIN
        .iter()
        .find(|(code, _)| *code == isin)
        .map(|(_, name)| *name)
        .unwrap_or("")
}
