//! Cross-references between stock indexes and ISIN codes.

use std::collections::HashMap;

use log::warn;

use super::StockWeight;
use crate::isin;

/// Name to ISIN reference list.
///
/// The first ISIN given for a name is kept. Invalid codes are still stored
/// so that the caller can show what the source said, and are reported
/// back by [`RefIsin::add_isin_refs`].
#[derive(Debug, Clone, Default)]
pub struct RefIsin {
    ref_isin: HashMap<String, String>,
}

impl RefIsin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `(name, isin)` pairs, returning the newly added pairs whose ISIN
    /// is invalid.
    pub fn add_isin_refs<'a, I>(&mut self, pairs: I) -> Vec<(String, String)>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut invalids = Vec::new();
        for (name, code) in pairs {
            if self.ref_isin.contains_key(name) {
                continue;
            }
            self.ref_isin.insert(name.to_string(), code.to_string());
            if !isin::is_valid(code) {
                invalids.push((name.to_string(), code.to_string()));
            }
        }
        invalids
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.ref_isin.get(name).map(String::as_str)
    }

    /// Sets the ISIN for a name, replacing any previous one.
    pub fn insert(&mut self, name: &str, code: &str) {
        self.ref_isin.insert(name.to_string(), code.to_string());
    }

    pub fn len(&self) -> usize {
        self.ref_isin.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ref_isin.is_empty()
    }
}

/// Health of a [`StockRefs`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefsStatus {
    Ok,
    /// The local index did not pass [`StockWeight::validate`]
    InvalidLocalIndex,
}

/// A set of stock indexes, one of which is the "local" (home) index.
#[derive(Debug, Clone)]
pub struct StockRefs {
    all_refs: Vec<StockWeight>,
    local: Option<usize>,
    status: RefsStatus,
}

impl StockRefs {
    pub fn new(local_stock: Option<StockWeight>) -> Self {
        let mut refs = Self {
            all_refs: Vec::new(),
            local: None,
            status: RefsStatus::Ok,
        };
        if let Some(stk) = local_stock {
            if !stk.validate() {
                warn!("Local index {} failed validation", stk.name());
                refs.status = RefsStatus::InvalidLocalIndex;
            }
            refs.add_ref_stock(stk);
            refs.local = Some(0);
        }
        refs
    }

    pub fn status(&self) -> RefsStatus {
        self.status
    }

    pub fn add_ref_stock(&mut self, stk: StockWeight) {
        self.all_refs.push(stk);
    }

    pub fn current_local(&self) -> Option<&StockWeight> {
        self.local.and_then(|idx| self.all_refs.get(idx))
    }

    pub fn current_local_name(&self) -> Option<&str> {
        self.current_local().map(StockWeight::name)
    }

    /// Makes the index called `name` the local one.
    pub fn set_local_by_name(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.local = Some(idx);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&StockWeight> {
        self.position(name).map(|idx| &self.all_refs[idx])
    }

    /// Adds a stock with unknown weight to the local index, or to the index
    /// named by `index`. Returns `false` when there is no such index.
    ///
    /// The underlying [`StockWeight::add`] result is not reported; a
    /// repeated abbreviation shows up on the next `validate()`.
    pub fn add_stock(&mut self, nick: &str, long_name: &str, index: Option<&str>) -> bool {
        let target = match index {
            Some(name) => self.position(name),
            None => self.local,
        };
        match target.and_then(|idx| self.all_refs.get_mut(idx)) {
            Some(stk) => {
                stk.add(nick, Some(long_name), None);
                true
            }
            None => false,
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.all_refs.iter().position(|stk| stk.name() == name)
    }
}

/// Whether a company name only uses characters expected in official
/// listings: it starts with an uppercase letter or a digit, followed by
/// alphanumerics, spaces, `.`, `-` or `,`.
pub fn comp_name_ok(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_uppercase() || first.is_ascii_digit())
        && chars.all(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | '-' | ','))
}
