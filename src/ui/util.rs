use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::DEFAULT_CATEGORIES;

/// Format an amount with thousand separators, 2 decimal places and a currency label.
/// e.g. `1234567.89` → `"CHF 1,234,567.89"`
pub(crate) fn format_amount(val: Decimal, currency: &str) -> String {
    let abs = val.abs().round_dp(2);
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    let sign = if val < Decimal::ZERO { "-" } else { "" };
    if currency.is_empty() {
        format!("{sign}{with_commas}.{dec_part}")
    } else {
        format!("{sign}{currency} {with_commas}.{dec_part}")
    }
}

/// Truncate a string to `max` visible characters, appending "…" if truncated.
/// The result is guaranteed to be at most `max` characters (counting "…" as one).
/// Safe for multi-byte UTF-8 characters.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let char_count = s.chars().count();
    if char_count <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{truncated}…")
}

/// A horizontal bar of `width` cells filled to `percent`.
pub(crate) fn share_bar(percent: Decimal, width: usize) -> String {
    let clamped = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let filled = (clamped * Decimal::from(width) / Decimal::ONE_HUNDRED)
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Split `add` arguments into `(amount, category, description)`.
///
/// The category is either a default category name (which may contain spaces, matched
/// case-insensitively) or the next single word. Whatever follows is the description.
pub(crate) fn split_add_args(args: &str) -> (String, String, String) {
    let args = args.trim();
    let (amount, rest) = match args.split_once(char::is_whitespace) {
        Some((a, r)) => (a, r.trim_start()),
        None => (args, ""),
    };

    let rest_lower = rest.to_lowercase();
    let known = DEFAULT_CATEGORIES
        .iter()
        .filter(|c| {
            let c = c.to_lowercase();
            rest_lower.starts_with(&c)
                && rest_lower[c.len()..]
                    .chars()
                    .next()
                    .map_or(true, char::is_whitespace)
        })
        .max_by_key(|c| c.len());

    let (category, description) = match known {
        Some(c) => (c.to_string(), rest.get(c.len()..).unwrap_or("").trim()),
        None => match rest.split_once(char::is_whitespace) {
            Some((c, d)) => (c.to_string(), d.trim()),
            None => (rest.to_string(), ""),
        },
    };

    (amount.to_string(), category, description.to_string())
}

/// Move a list cursor down by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if *index + 1 < len {
        *index += 1;
        if *index >= *scroll + page {
            *scroll = index.saturating_sub(page - 1);
        }
    }
}

/// Move a list cursor up by one, adjusting scroll to keep cursor visible.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    if *index < *scroll {
        *scroll = *index;
    }
}

/// Jump cursor to the top of a list.
pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

/// Jump cursor to the bottom of a list.
pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len > 0 {
        *index = len - 1;
        *scroll = index.saturating_sub(page.saturating_sub(1));
    }
}
