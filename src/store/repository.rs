use rust_decimal::Decimal;
use std::str::FromStr;

use super::{KeyValueStore, StoreError};
use crate::models::{LedgerState, Transaction};

pub(crate) const LEDGER_KEY: &str = "ledger";

// Older multi-key layout: one key per field.
const LEGACY_BUDGET_KEY: &str = "budget";
const LEGACY_TRANSACTIONS_KEY: &str = "transactions";
const LEGACY_NAME_KEY: &str = "userName";
const LEGACY_THEME_KEY: &str = "theme";
const LEGACY_KEYS: &[&str] = &[
    LEGACY_BUDGET_KEY,
    LEGACY_TRANSACTIONS_KEY,
    LEGACY_NAME_KEY,
    LEGACY_THEME_KEY,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadSource {
    /// Nothing stored yet.
    Fresh,
    /// Decoded from the single ledger record.
    Stored,
    /// Assembled from the per-field legacy keys; should be rewritten.
    Legacy,
    /// The stored record could not be read or decoded; defaults were used.
    Corrupt,
}

#[derive(Debug)]
pub(crate) struct Loaded {
    pub(crate) state: LedgerState,
    pub(crate) source: LoadSource,
    /// Some legacy transactions could not be carried over; their key must survive.
    pub(crate) legacy_incomplete: bool,
}

impl Loaded {
    fn defaults(source: LoadSource) -> Self {
        Self {
            state: LedgerState::default(),
            source,
            legacy_incomplete: false,
        }
    }
}

/// Encodes the ledger as one JSON record under [`LEDGER_KEY`].
pub(crate) struct LedgerRepository {
    store: Box<dyn KeyValueStore>,
}

impl LedgerRepository {
    pub(crate) fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Never fails: unreadable or corrupt data falls back to an empty ledger.
    pub(crate) fn load(&self) -> Loaded {
        match self.store.get(LEDGER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<LedgerState>(&raw) {
                Ok(state) => Loaded {
                    state,
                    source: LoadSource::Stored,
                    legacy_incomplete: false,
                },
                Err(e) => {
                    tracing::warn!(error = %e, "stored ledger is corrupt, starting empty");
                    Loaded::defaults(LoadSource::Corrupt)
                }
            },
            Ok(None) => self.load_legacy(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored ledger, starting empty");
                Loaded::defaults(LoadSource::Corrupt)
            }
        }
    }

    pub(crate) fn save(&mut self, state: &LedgerState) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(state)?;
        self.store.set(LEDGER_KEY, &encoded)
    }

    /// Drop the per-field keys once their content lives in the single record.
    /// With `keep_transactions` the old transaction list stays for manual recovery.
    pub(crate) fn clear_legacy(&mut self, keep_transactions: bool) -> Result<(), StoreError> {
        for key in LEGACY_KEYS {
            if keep_transactions && *key == LEGACY_TRANSACTIONS_KEY {
                continue;
            }
            self.store.remove(key)?;
        }
        Ok(())
    }

    fn load_legacy(&self) -> Loaded {
        let mut found = false;
        let mut read = |key: &str| -> Option<String> {
            match self.store.get(key) {
                Ok(value) => {
                    found |= value.is_some();
                    value
                }
                Err(e) => {
                    tracing::warn!(key, error = %e, "could not read legacy key");
                    None
                }
            }
        };

        let budget = read(LEGACY_BUDGET_KEY);
        let transactions = read(LEGACY_TRANSACTIONS_KEY);
        let name = read(LEGACY_NAME_KEY);
        let theme = read(LEGACY_THEME_KEY);

        if !found {
            return Loaded::defaults(LoadSource::Fresh);
        }

        let mut state = LedgerState {
            budget: budget.as_deref().map(parse_legacy_budget).unwrap_or_default(),
            name: name.map(|n| unquote(&n)).unwrap_or_default(),
            theme: theme.map(|t| unquote(&t)).unwrap_or_default(),
            ..Default::default()
        };

        let mut incomplete = false;
        if let Some(raw) = transactions {
            match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
                Ok(entries) => {
                    for entry in entries {
                        match decode_legacy_transaction(entry) {
                            Some(txn) => state.transactions.push(txn),
                            None => incomplete = true,
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "legacy transactions are unreadable, keeping them");
                    incomplete = true;
                }
            }
        }

        tracing::info!(
            transactions = state.transactions.len(),
            incomplete,
            "migrating legacy ledger layout"
        );
        Loaded {
            state,
            source: LoadSource::Legacy,
            legacy_incomplete: incomplete,
        }
    }
}

/// One legacy entry, or `None` when it is unreadable or has no positive amount.
fn decode_legacy_transaction(entry: serde_json::Value) -> Option<Transaction> {
    match serde_json::from_value::<Transaction>(entry) {
        Ok(txn) if txn.amount > Decimal::ZERO => Some(txn),
        Ok(txn) => {
            tracing::warn!(amount = %txn.amount, "legacy transaction without a positive amount skipped");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "unreadable legacy transaction skipped");
            None
        }
    }
}

/// Legacy budgets were stored as free text; anything unusable counts as zero.
fn parse_legacy_budget(raw: &str) -> Decimal {
    Decimal::from_str(unquote(raw).as_str())
        .ok()
        .filter(|b| !b.is_sign_negative())
        .unwrap_or_default()
}

fn unquote(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}
