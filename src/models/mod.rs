mod category;
mod state;
mod theme;
mod transaction;

pub(crate) use category::{find_default, DEFAULT_CATEGORIES};
#[cfg(test)]
pub(crate) use category::FALLBACK_CATEGORY;
pub(crate) use state::LedgerState;
pub(crate) use theme::Theme;
pub(crate) use transaction::Transaction;
#[cfg(test)]
pub(crate) use transaction::DESCRIPTION_PLACEHOLDER;

#[cfg(test)]
mod tests;
