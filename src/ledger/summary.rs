use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::models::Transaction;

/// Largest amount or budget accepted from input, in whole currency units.
pub(crate) const MAX_WHOLE_UNITS: i64 = 1_000_000_000_000;
/// Most decimal places accepted from input.
pub(crate) const MAX_SCALE: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Summary {
    pub(crate) budget: Decimal,
    pub(crate) spent: Decimal,
    /// `max(0, budget - spent)`; overspend shows up in `over_budget` instead.
    pub(crate) remaining: Decimal,
    pub(crate) over_budget: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CategoryTotal {
    pub(crate) category: String,
    pub(crate) amount: Decimal,
}

impl CategoryTotal {
    /// Percentage of `total`, rounded to one decimal place.
    pub(crate) fn share_of(&self, total: Decimal) -> Decimal {
        self.amount
            .checked_div(total)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(|pct| pct.round_dp(1))
            .unwrap_or_default()
    }
}

pub(crate) fn compute_summary(budget: Decimal, transactions: &[Transaction]) -> Summary {
    let spent = transactions
        .iter()
        .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount));
    Summary {
        budget,
        spent,
        remaining: (budget - spent).max(Decimal::ZERO),
        over_budget: spent > budget,
    }
}

/// Sums per category, keyed in the order each category first appears.
pub(crate) fn aggregate_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for txn in transactions {
        match totals.iter_mut().find(|t| t.category == txn.category) {
            Some(total) => total.amount = total.amount.saturating_add(txn.amount),
            None => totals.push(CategoryTotal {
                category: txn.category.clone(),
                amount: txn.amount,
            }),
        }
    }
    totals
}

pub(crate) fn distinct_categories(transactions: &[Transaction]) -> Vec<String> {
    transactions
        .iter()
        .map(|t| t.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub(crate) fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    query: &str,
    category: &str,
) -> Vec<&'a Transaction> {
    let needle = query.trim().to_lowercase();
    transactions
        .iter()
        .filter(|t| t.matches_query(&needle))
        .filter(|t| category.is_empty() || t.category == category)
        .collect()
}

/// Parse user-typed money. Accepts surrounding whitespace and a lone comma as
/// the decimal separator (`12,50`). Values beyond [`MAX_WHOLE_UNITS`] or with more
/// than [`MAX_SCALE`] decimal places are rejected.
pub(crate) fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };
    Decimal::from_str(&normalized)
        .ok()
        .filter(|d| d.abs() <= Decimal::from(MAX_WHOLE_UNITS))
        .filter(|d| d.normalize().scale() <= MAX_SCALE)
}

/// Sum of `amount` and every recorded amount, or `None` if it would overflow.
pub(crate) fn checked_total(amount: Decimal, transactions: &[Transaction]) -> Option<Decimal> {
    transactions
        .iter()
        .try_fold(amount, |acc, t| acc.checked_add(t.amount))
}
