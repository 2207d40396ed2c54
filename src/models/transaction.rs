use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Shown in place of a blank description.
pub(crate) const DESCRIPTION_PLACEHOLDER: &str = "—";

/// One recorded expense. Amounts are positive magnitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Transaction {
    #[serde(default = "Uuid::new_v4")]
    pub(crate) id: Uuid,
    #[serde(rename = "desc", default)]
    pub(crate) description: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub(crate) amount: Decimal,
    #[serde(default)]
    pub(crate) category: String,
    #[serde(rename = "date", default = "Utc::now", deserialize_with = "date_or_now")]
    pub(crate) created_at: DateTime<Utc>,
}

/// Older records may carry an empty or null date; those get the load time.
fn date_or_now<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(Utc::now()),
        Some(raw) => raw.parse().map_err(serde::de::Error::custom),
    }
}

impl Transaction {
    pub(crate) fn new(description: &str, amount: Decimal, category: &str) -> Self {
        let description = description.trim();
        Self {
            id: Uuid::new_v4(),
            description: if description.is_empty() {
                DESCRIPTION_PLACEHOLDER.to_string()
            } else {
                description.to_string()
            },
            amount,
            category: super::category::normalize(category),
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive substring match against description or category.
    pub(crate) fn matches_query(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self.description.to_lowercase().contains(needle_lower)
            || self.category.to_lowercase().contains(needle_lower)
    }

    /// Short form of the id, enough to tell entries apart on screen.
    pub(crate) fn short_id(&self) -> String {
        let mut short = self.id.simple().to_string();
        short.truncate(8);
        short
    }
}
