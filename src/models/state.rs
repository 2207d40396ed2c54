use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Theme, Transaction};

/// The persisted ledger record. Totals are derived on read and never stored here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct LedgerState {
    pub(crate) name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub(crate) budget: Decimal,
    pub(crate) transactions: Vec<Transaction>,
    pub(crate) theme: String,
}

impl LedgerState {
    pub(crate) fn theme(&self) -> Theme {
        Theme::parse(&self.theme)
    }
}
