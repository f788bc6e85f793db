//! Numbered views over normalized transactions.

use std::collections::BTreeMap;

use serde::Serialize;

use super::transactions_errors::TransactionError;
use super::transactions_model::{LedgerEntry, ProvisionalEntry};

/// The outcome of one normalization pass.
///
/// `from_to` lists every transaction in chronological order under its
/// global id. `by_account` holds the same transactions split per account,
/// each bucket numbered on its own. Both views are produced together and
/// differ only in `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    from_to: Vec<LedgerEntry>,
    by_account: BTreeMap<String, Vec<LedgerEntry>>,
}

impl Ledger {
    /// Numbers provisional entries, oldest first.
    ///
    /// Global ids start at `ledger_base + 1`; per-account ids start at
    /// `account_base + 1` in every bucket. Every account in `accounts` gets
    /// a bucket, possibly empty. Entries for other accounts are rejected, as
    /// are ids past `u64::MAX`.
    pub(crate) fn build<'a, A>(
        entries: Vec<ProvisionalEntry>,
        accounts: A,
        ledger_base: u64,
        account_base: u64,
    ) -> Result<Self, TransactionError>
    where
        A: IntoIterator<Item = &'a str>,
    {
        let mut by_account: BTreeMap<String, Vec<LedgerEntry>> = accounts
            .into_iter()
            .map(|acc| (acc.to_string(), Vec::new()))
            .collect();
        let mut from_to = Vec::with_capacity(entries.len());

        for (pos, provisional) in entries.into_iter().enumerate() {
            let bucket = by_account.get_mut(&provisional.account).ok_or_else(|| {
                TransactionError::UnknownAccount {
                    row: provisional.row,
                    account: provisional.account.clone(),
                }
            })?;
            let row = provisional.row;
            let global_id =
                next_id(ledger_base, pos).ok_or(TransactionError::IdOverflow { row })?;
            let account_id =
                next_id(account_base, bucket.len()).ok_or(TransactionError::IdOverflow { row })?;
            let global = provisional.into_entry(global_id);
            bucket.push(global.renumbered(account_id));
            from_to.push(global);
        }

        Ok(Self {
            from_to,
            by_account,
        })
    }

    /// Every transaction, chronological, with global ids.
    pub fn from_to(&self) -> &[LedgerEntry] {
        &self.from_to
    }

    /// Transactions of one account with per-account ids.
    ///
    /// An account without transactions yields an empty slice; an account
    /// that does not exist is [`TransactionError::AccountNotFound`].
    pub fn by_account(&self, account: &str) -> Result<&[LedgerEntry], TransactionError> {
        self.by_account
            .get(account)
            .map(Vec::as_slice)
            .ok_or_else(|| TransactionError::AccountNotFound(account.to_string()))
    }

    /// Account identifiers with a bucket, sorted.
    pub fn accounts(&self) -> Vec<&str> {
        self.by_account.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.from_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_to.is_empty()
    }

    /// Checks that both views hold the same transactions.
    ///
    /// Every bucket must be numbered contiguously from `account_base + 1`,
    /// and each bucket entry must match a flat entry field for field, apart
    /// from the id.
    pub fn check_consistency(&self, account_base: u64) -> Result<(), TransactionError> {
        let bucketed: usize = self.by_account.values().map(Vec::len).sum();
        if bucketed != self.from_to.len() {
            return Err(TransactionError::Inconsistent(format!(
                "{} bucketed entries for {} transactions",
                bucketed,
                self.from_to.len()
            )));
        }

        for (account, bucket) in &self.by_account {
            let mut flat = self.from_to.iter().filter(|e| &e.account == account);
            for (pos, entry) in bucket.iter().enumerate() {
                let expected_id = next_id(account_base, pos).unwrap_or_default();
                if entry.id != expected_id {
                    return Err(TransactionError::Inconsistent(format!(
                        "account {}: id {} where {} was expected",
                        account, entry.id, expected_id
                    )));
                }
                match flat.next() {
                    Some(global) if global.renumbered(entry.id) == *entry => {}
                    _ => {
                        return Err(TransactionError::Inconsistent(format!(
                            "account {}: entry {} differs from the flat ledger",
                            account, entry.id
                        )))
                    }
                }
            }
        }
        Ok(())
    }
}

/// Id of the entry at `pos` in a sequence numbered from `base + 1`.
fn next_id(base: u64, pos: usize) -> Option<u64> {
    u64::try_from(pos)
        .ok()
        .and_then(|pos| base.checked_add(pos))
        .and_then(|id| id.checked_add(1))
}
