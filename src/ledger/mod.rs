//! The ledger state manager: budget, transactions and everything derived from them.
//!
//! Every mutation builds the next state, persists it, and only then swaps it in,
//! so a failed save leaves the in-memory ledger exactly as it was.

mod error;
mod summary;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{LedgerState, Theme, Transaction};
use crate::store::{LedgerRepository, LoadSource};

pub(crate) use error::LedgerError;
pub(crate) use summary::{parse_amount, CategoryTotal, Summary};

pub(crate) const CSV_HEADER: [&str; 4] = ["category", "description", "amount", "date"];

pub(crate) struct Ledger {
    state: LedgerState,
    repo: LedgerRepository,
}

impl Ledger {
    /// Load from the repository. Legacy layouts are rewritten into the single record.
    pub(crate) fn open(mut repo: LedgerRepository) -> Self {
        let loaded = repo.load();
        if loaded.source == LoadSource::Legacy {
            let cleared = repo
                .save(&loaded.state)
                .and_then(|()| repo.clear_legacy(loaded.legacy_incomplete));
            match cleared {
                Ok(()) => tracing::info!("legacy ledger migrated"),
                Err(e) => tracing::warn!(error = %e, "could not persist migrated ledger"),
            }
        }
        tracing::debug!(
            source = ?loaded.source,
            transactions = loaded.state.transactions.len(),
            "ledger opened"
        );
        Self {
            state: loaded.state,
            repo,
        }
    }

    // ── Accessors ────────────────────────────────────────────

    pub(crate) fn budget(&self) -> Decimal {
        self.state.budget
    }

    pub(crate) fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub(crate) fn name(&self) -> &str {
        &self.state.name
    }

    pub(crate) fn needs_name(&self) -> bool {
        self.state.name.trim().is_empty()
    }

    pub(crate) fn theme(&self) -> Theme {
        self.state.theme()
    }

    /// Resolve a full id or an unambiguous prefix of its hex form.
    pub(crate) fn find_id(&self, needle: &str) -> Option<Uuid> {
        if let Ok(id) = Uuid::parse_str(needle.trim()) {
            return Some(id);
        }
        let prefix = needle.trim().to_lowercase().replace('-', "");
        if prefix.is_empty() {
            return None;
        }
        let mut matches = self
            .state
            .transactions
            .iter()
            .filter(|t| t.id.simple().to_string().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Some(txn.id),
            _ => None,
        }
    }

    // ── Mutations ────────────────────────────────────────────

    pub(crate) fn set_budget(&mut self, input: &str) -> Result<Decimal, LedgerError> {
        let budget = parse_amount(input)
            .filter(|b| !b.is_sign_negative())
            .ok_or_else(|| LedgerError::InvalidBudget(input.trim().to_string()))?;
        let mut next = self.state.clone();
        next.budget = budget;
        self.commit(next)?;
        tracing::info!(%budget, "budget set");
        Ok(budget)
    }

    pub(crate) fn add_transaction(
        &mut self,
        description: &str,
        amount: &str,
        category: &str,
    ) -> Result<Uuid, LedgerError> {
        let amount_value = parse_amount(amount)
            .filter(|a| *a > Decimal::ZERO)
            .filter(|a| summary::checked_total(*a, &self.state.transactions).is_some())
            .ok_or_else(|| LedgerError::InvalidAmount(amount.trim().to_string()))?;
        let txn = Transaction::new(description, amount_value, category);
        let id = txn.id;
        let category = txn.category.clone();
        let mut next = self.state.clone();
        next.transactions.push(txn);
        self.commit(next)?;
        tracing::info!(%id, amount = %amount_value, %category, "transaction added");
        Ok(id)
    }

    /// Returns whether an entry was removed. An unknown id is a no-op.
    pub(crate) fn delete_transaction(&mut self, id: Uuid) -> Result<bool, LedgerError> {
        let Some(pos) = self.state.transactions.iter().position(|t| t.id == id) else {
            tracing::debug!(%id, "delete of unknown transaction ignored");
            return Ok(false);
        };
        let mut next = self.state.clone();
        next.transactions.remove(pos);
        self.commit(next)?;
        tracing::info!(%id, "transaction deleted");
        Ok(true)
    }

    /// Clear the history. The budget is kept.
    pub(crate) fn reset_all(&mut self) -> Result<(), LedgerError> {
        let cleared = self.state.transactions.len();
        let mut next = self.state.clone();
        next.transactions.clear();
        self.commit(next)?;
        tracing::info!(cleared, "history reset");
        Ok(())
    }

    pub(crate) fn set_name(&mut self, name: &str) -> Result<(), LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::EmptyName);
        }
        let mut next = self.state.clone();
        next.name = name.to_string();
        self.commit(next)?;
        tracing::info!("display name set");
        Ok(())
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) -> Result<(), LedgerError> {
        let mut next = self.state.clone();
        next.theme = theme.as_str().to_string();
        self.commit(next)?;
        tracing::info!(%theme, "theme set");
        Ok(())
    }

    fn commit(&mut self, next: LedgerState) -> Result<(), LedgerError> {
        if let Err(e) = self.repo.save(&next) {
            tracing::error!(error = %e, "failed to persist ledger, change discarded");
            return Err(e.into());
        }
        self.state = next;
        Ok(())
    }

    // ── Derived views ────────────────────────────────────────

    pub(crate) fn compute_summary(&self) -> Summary {
        summary::compute_summary(self.state.budget, &self.state.transactions)
    }

    pub(crate) fn aggregate_by_category(&self) -> Vec<CategoryTotal> {
        summary::aggregate_by_category(&self.state.transactions)
    }

    pub(crate) fn distinct_categories(&self) -> Vec<String> {
        summary::distinct_categories(&self.state.transactions)
    }

    pub(crate) fn filter_transactions(&self, query: &str, category: &str) -> Vec<&Transaction> {
        summary::filter_transactions(&self.state.transactions, query, category)
    }

    /// The whole history as CSV. An empty ledger is an `EmptyExport` error, never a
    /// header-only document.
    pub(crate) fn to_csv(&self) -> Result<String, LedgerError> {
        if self.state.transactions.is_empty() {
            return Err(LedgerError::EmptyExport);
        }
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(CSV_HEADER)?;
        for txn in &self.state.transactions {
            let amount = txn.amount.normalize().to_string();
            let date = txn
                .created_at
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
            wtr.write_record([
                txn.category.as_str(),
                txn.description.as_str(),
                amount.as_str(),
                date.as_str(),
            ])?;
        }
        let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
        String::from_utf8(bytes).map_err(|e| std::io::Error::other(e).into())
    }
}
