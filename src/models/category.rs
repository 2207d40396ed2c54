/// Categories offered as choices when nothing has been recorded yet.
pub(crate) const DEFAULT_CATEGORIES: &[&str] = &[
    "Phone plan",
    "Funds",
    "Parents",
    "Food",
    "Hairdresser",
    "Savings",
    "Gifts",
    "Other",
];

/// Used when a transaction is recorded without a category.
pub(crate) const FALLBACK_CATEGORY: &str = "Other";

pub(crate) fn normalize(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        FALLBACK_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Find a default category by name (case-insensitive), returning its canonical spelling.
pub(crate) fn find_default(name: &str) -> Option<&'static str> {
    let lower = name.trim().to_lowercase();
    DEFAULT_CATEGORIES
        .iter()
        .find(|c| c.to_lowercase() == lower)
        .copied()
}
